pub mod prelude;

pub mod gift_searches;
