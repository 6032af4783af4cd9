//! Order item extra entity - Represents one add-on recorded on an order item.
//!
//! The label and unit price are snapshots from the cart; `option_id` keeps a
//! reference back to the catalog option when it still exists.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order item extra database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_item_extras")]
pub struct Model {
    /// Unique identifier for the recorded add-on
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the order item this add-on was attached to
    pub order_item_id: i64,
    /// ID of the catalog option the add-on was built from, if any
    pub option_id: Option<i64>,
    /// Add-on label as it read at submission time (e.g., "Cheese: Extra cheese")
    pub label: String,
    /// Price added per unit by this add-on
    pub unit_price: f64,
}

/// Defines relationships between `OrderItemExtra` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each recorded add-on belongs to one order item
    #[sea_orm(
        belongs_to = "super::order_item::Entity",
        from = "Column::OrderItemId",
        to = "super::order_item::Column::Id"
    )]
    OrderItem,
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
