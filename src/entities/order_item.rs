//! Order item entity - Represents one line of a submitted order.
//!
//! Order items are snapshots of cart line items at submission time: the
//! product name and unit price are copied rather than joined, so renaming or
//! retiring a product never rewrites order history or analytics.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    /// Unique identifier for the order item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the order this item belongs to
    pub order_id: i64,
    /// ID of the catalog product the item was built from
    pub product_id: i64,
    /// Product name as it read at submission time
    pub product_name: String,
    /// Number of units ordered
    pub quantity: i32,
    /// Per-unit price including selected add-ons
    pub unit_price: f64,
    /// Total price for the full quantity
    pub total_price: f64,
    /// Optional free-text preparation instructions
    pub special_instructions: Option<String>,
    /// When the item was recorded
    pub created_at: DateTimeUtc,
}

/// Defines relationships between `OrderItem` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each item belongs to one order
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
    /// One item has many recorded add-ons
    #[sea_orm(has_many = "super::order_item_extra::Entity")]
    Extras,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::order_item_extra::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Extras.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
