pub use super::gift_searches::Entity as GiftSearches;
