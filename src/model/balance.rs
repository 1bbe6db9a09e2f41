//! Balance domain model.

/// Per-user referral balance as read from the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Balance {
    /// Discord ID of the user holding the balance.
    pub user_id: String,
    /// Accumulated balance. May be negative.
    pub balance: f64,
}

impl Balance {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Balance` - The converted domain model
    pub fn from_entity(entity: entity::balance::Model) -> Self {
        Self {
            user_id: entity.user_id,
            balance: entity.balance,
        }
    }
}
