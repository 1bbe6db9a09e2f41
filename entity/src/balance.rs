//! Entity model for the `balances` table.
//!
//! One row per Discord user that has ever been credited or debited. Users
//! without a row implicitly hold a balance of zero; rows are created lazily
//! on the first balance change and are never deleted.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "balances")]
pub struct Model {
    /// Discord user ID stored as a string snowflake.
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    /// Accumulated referral balance. May be negative.
    pub balance: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
