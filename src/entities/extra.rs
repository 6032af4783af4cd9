//! Extra entity - Represents a customization option group.
//!
//! An extra group (e.g., "Cheese", "Sauces") is offered for every product in
//! its category. A `required` group must have at least one option chosen, and
//! `max_selections` caps how many options may be chosen from the group.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Extra group database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "extras")]
pub struct Model {
    /// Unique identifier for the extra group
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the category whose products offer this group
    pub category_id: i64,
    /// Display name of the group (e.g., "Cheese", "Toppings")
    pub name: String,
    /// Whether at least one option from this group must be selected
    pub required: bool,
    /// Maximum number of options that may be selected from this group
    pub max_selections: i32,
    /// Whether the group is currently offered during customization
    pub active: bool,
    /// When the group was created
    pub created_at: DateTimeUtc,
    /// When the group was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Extra and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each extra group belongs to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    /// One extra group has many selectable options
    #[sea_orm(has_many = "super::extra_option::Entity")]
    Options,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::extra_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Options.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
