//! Product entity - Represents a sellable item of the menu catalog.
//!
//! Each product belongs to a category and carries the base price used when a
//! customer adds it to the cart. Cart line items copy name and price at
//! selection time, so later catalog edits never rewrite cart or order history.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the category this product is listed under
    pub category_id: i64,
    /// Display name of the product (e.g., "Classic Burger")
    pub name: String,
    /// Optional longer description shown in the storefront
    pub description: Option<String>,
    /// Base price per unit, before add-ons
    pub price: f64,
    /// Optional image URL shown in the storefront
    pub image_url: Option<String>,
    /// Whether the product can currently be ordered
    pub available: bool,
    /// Whether the product is highlighted as a promotion
    pub is_promotion: bool,
    /// When the product was created
    pub created_at: DateTimeUtc,
    /// When the product was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product belongs to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
