//! Menu seed configuration loading from menu.toml
//!
//! This module provides functionality to load an initial menu (categories,
//! products, and extra groups with their options) from a TOML configuration
//! file. The menu defined in menu.toml is used to seed an empty database on
//! first run; entries whose names already exist are skipped so re-seeding is
//! idempotent.

use crate::{
    core::{category, extra, product},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Configuration structure representing the entire menu.toml file
#[derive(Debug, Deserialize)]
pub struct MenuConfig {
    /// Categories to seed
    #[serde(default)]
    pub categories: Vec<CategoryConfig>,
    /// Products to seed, referencing categories by name
    #[serde(default)]
    pub products: Vec<ProductConfig>,
    /// Extra groups to seed, referencing categories by name
    #[serde(default)]
    pub extras: Vec<ExtraConfig>,
}

/// Configuration for a single category
#[derive(Debug, Deserialize, Clone)]
pub struct CategoryConfig {
    /// Name of the category
    pub name: String,
    /// Optional description shown in the storefront
    pub description: Option<String>,
    /// Optional icon glyph
    pub icon: Option<String>,
    /// Position in storefront listings
    #[serde(default)]
    pub display_order: i32,
}

/// Configuration for a single product
#[derive(Debug, Deserialize, Clone)]
pub struct ProductConfig {
    /// Name of the product
    pub name: String,
    /// Name of the category the product is listed under
    pub category: String,
    /// Base price per unit
    pub price: f64,
    /// Optional description shown in the storefront
    pub description: Option<String>,
    /// Optional image URL
    pub image_url: Option<String>,
}

/// Configuration for a single extra group and its options
#[derive(Debug, Deserialize, Clone)]
pub struct ExtraConfig {
    /// Name of the extra group
    pub name: String,
    /// Name of the category whose products offer this group
    pub category: String,
    /// Whether a selection from this group is mandatory
    #[serde(default)]
    pub required: bool,
    /// Maximum number of options selectable from this group
    #[serde(default = "default_max_selections")]
    pub max_selections: i32,
    /// Selectable options inside the group
    #[serde(default)]
    pub options: Vec<ExtraOptionConfig>,
}

/// Configuration for a single option inside an extra group
#[derive(Debug, Deserialize, Clone)]
pub struct ExtraOptionConfig {
    /// Name of the option
    pub name: String,
    /// Price added per unit when selected
    #[serde(default)]
    pub price: f64,
}

const fn default_max_selections() -> i32 {
    1
}

/// Loads menu configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<MenuConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read menu file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse menu.toml: {e}"),
    })
}

/// Seeds the database with the configured menu, skipping entries that already exist.
///
/// Categories are created first, then products and extra groups are attached to
/// them by category name. A product or extra group referencing a category that
/// is neither configured nor already present is an error.
pub async fn seed_menu(db: &DatabaseConnection, menu: &MenuConfig) -> Result<()> {
    for cat in &menu.categories {
        if category::get_category_by_name(db, &cat.name).await?.is_some() {
            continue;
        }
        category::create_category(
            db,
            cat.name.clone(),
            cat.description.clone(),
            cat.icon.clone(),
            cat.display_order,
        )
        .await?;
        info!(category = %cat.name, "seeded category");
    }

    for prod in &menu.products {
        let cat = category::get_category_by_name(db, &prod.category)
            .await?
            .ok_or_else(|| Error::CategoryNotFound {
                name: prod.category.clone(),
            })?;

        if product::get_product_by_name(db, &prod.name).await?.is_some() {
            continue;
        }
        product::create_product(
            db,
            cat.id,
            prod.name.clone(),
            prod.description.clone(),
            prod.price,
            prod.image_url.clone(),
        )
        .await?;
        info!(product = %prod.name, category = %prod.category, "seeded product");
    }

    for group in &menu.extras {
        let cat = category::get_category_by_name(db, &group.category)
            .await?
            .ok_or_else(|| Error::CategoryNotFound {
                name: group.category.clone(),
            })?;

        if extra::get_extra_by_name(db, cat.id, &group.name)
            .await?
            .is_some()
        {
            continue;
        }
        let created = extra::create_extra(
            db,
            cat.id,
            group.name.clone(),
            group.required,
            group.max_selections,
        )
        .await?;
        for opt in &group.options {
            extra::create_extra_option(db, created.id, opt.name.clone(), opt.price).await?;
        }
        info!(
            extra = %group.name,
            options = group.options.len(),
            "seeded extra group"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::setup_test_db;

    fn sample_menu() -> MenuConfig {
        let toml_str = r#"
            [[categories]]
            name = "Burgers"
            icon = "🍔"
            display_order = 1

            [[categories]]
            name = "Drinks"
            icon = "🥤"
            display_order = 2

            [[products]]
            name = "Classic Burger"
            category = "Burgers"
            price = 12.99
            description = "Juicy beef, lettuce, tomato, onion"

            [[products]]
            name = "Cola"
            category = "Drinks"
            price = 2.50

            [[extras]]
            name = "Cheese"
            category = "Burgers"
            max_selections = 2

            [[extras.options]]
            name = "Cheddar"
            price = 1.5

            [[extras.options]]
            name = "Blue cheese"
            price = 2.0
        "#;

        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn test_parse_menu_config() {
        let menu = sample_menu();
        assert_eq!(menu.categories.len(), 2);
        assert_eq!(menu.products.len(), 2);
        assert_eq!(menu.extras.len(), 1);
        assert_eq!(menu.extras[0].options.len(), 2);
        assert_eq!(menu.extras[0].max_selections, 2);
        assert!(!menu.extras[0].required);
        assert_eq!(menu.products[0].price, 12.99);
    }

    #[tokio::test]
    async fn test_seed_menu_populates_catalog() -> Result<()> {
        let db = setup_test_db().await?;
        let menu = sample_menu();

        seed_menu(&db, &menu).await?;

        let categories = category::get_all_active_categories(&db).await?;
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Burgers");

        let products = product::get_all_available_products(&db).await?;
        assert_eq!(products.len(), 2);

        let groups = extra::get_active_extras_with_options(&db, categories[0].id).await?;
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].options.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_menu_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let menu = sample_menu();

        seed_menu(&db, &menu).await?;
        seed_menu(&db, &menu).await?;

        let categories = category::get_all_active_categories(&db).await?;
        assert_eq!(categories.len(), 2);
        let products = product::get_all_available_products(&db).await?;
        assert_eq!(products.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_menu_unknown_category_is_an_error() -> Result<()> {
        let db = setup_test_db().await?;
        let menu: MenuConfig = toml::from_str(
            r#"
            [[products]]
            name = "Orphan"
            category = "Nowhere"
            price = 5.0
        "#,
        )
        .unwrap();

        let result = seed_menu(&db, &menu).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::CategoryNotFound { name: _ }
        ));

        Ok(())
    }
}
