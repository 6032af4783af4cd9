//! Order entity - Represents a submitted customer order.
//!
//! Orders capture the customer contact block, delivery and payment choices,
//! the grand total, and a status that the back office advances through
//! `pending`, `preparing`, `ready`, `delivered`, or `cancelled`. Delivery
//! method, payment method, and status are stored as strings; typed views
//! live in [`crate::core::order`].

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Customer's full name
    pub customer_name: String,
    /// Customer's contact phone number
    pub customer_phone: String,
    /// Delivery address, present only for home delivery orders
    pub customer_address: Option<String>,
    /// How the order is handed over: `"pickup"` or `"delivery"`
    pub delivery_method: String,
    /// How the order is paid: `"cash"` or `"transfer"`
    pub payment_method: String,
    /// Optional free-text notes attached at checkout
    pub notes: Option<String>,
    /// Current fulfilment status of the order
    pub status: String,
    /// Grand total of the order at submission time
    pub total_amount: f64,
    /// When the order was placed
    pub created_at: DateTimeUtc,
    /// When the order was last modified (status changes)
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Order and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One order has many line items
    #[sea_orm(has_many = "super::order_item::Entity")]
    Items,
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
