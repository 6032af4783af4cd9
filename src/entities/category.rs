//! Category entity - Represents a menu section of the storefront.
//!
//! Each category groups products (e.g., "Burgers", "Drinks") and owns the
//! extra groups offered when customizing products in that section.
//! Categories are soft-deactivated rather than deleted so menu history survives.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique identifier for the category
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the category (e.g., "Burgers", "Pizzas")
    pub name: String,
    /// Optional longer description shown in the storefront
    pub description: Option<String>,
    /// Optional icon glyph shown next to the name
    pub icon: Option<String>,
    /// Position of the category in storefront listings (ascending)
    pub display_order: i32,
    /// Whether the category is currently visible in the storefront
    pub active: bool,
    /// When the category was created
    pub created_at: DateTimeUtc,
    /// When the category was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Category and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One category has many products
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
    /// One category has many extra groups
    #[sea_orm(has_many = "super::extra::Entity")]
    Extras,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl Related<super::extra::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Extras.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
