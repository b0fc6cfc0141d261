pub mod purch;
