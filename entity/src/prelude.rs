pub use super::balance::Entity as Balance;
