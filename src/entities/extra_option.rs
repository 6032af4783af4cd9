//! Extra option entity - Represents one selectable option inside an extra group.
//!
//! Options carry their own price which is added to the product's base price
//! for every unit of the cart line item they are attached to.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Extra option database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "extra_options")]
pub struct Model {
    /// Unique identifier for the option
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the extra group this option belongs to
    pub extra_id: i64,
    /// Display name of the option (e.g., "Extra cheese")
    pub name: String,
    /// Price added per unit when this option is selected
    pub price: f64,
    /// Whether the option is currently selectable
    pub active: bool,
    /// When the option was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between `ExtraOption` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each option belongs to one extra group
    #[sea_orm(
        belongs_to = "super::extra::Entity",
        from = "Column::ExtraId",
        to = "super::extra::Column::Id"
    )]
    Extra,
}

impl Related<super::extra::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Extra.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
