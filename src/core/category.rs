//! Category business logic - Handles all menu section operations.
//!
//! Provides functions for creating, retrieving, updating, and managing the
//! storefront's categories. All functions are async and return Result types
//! for error handling.

use crate::{
    entities::{Category, category},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all active categories, ordered by display position then name.
///
/// This is the listing the storefront renders as its section bar and the
/// back office uses when attaching products and extra groups.
pub async fn get_all_active_categories(db: &DatabaseConnection) -> Result<Vec<category::Model>> {
    Category::find()
        .filter(category::Column::Active.eq(true))
        .order_by_asc(category::Column::DisplayOrder)
        .order_by_asc(category::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a specific category by its name, returning None if not found or inactive.
pub async fn get_category_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<category::Model>> {
    Category::find()
        .filter(category::Column::Name.eq(name))
        .filter(category::Column::Active.eq(true))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific category by its unique ID.
pub async fn get_category_by_id(
    db: &DatabaseConnection,
    category_id: i64,
) -> Result<Option<category::Model>> {
    Category::find_by_id(category_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new category with the specified parameters, performing input validation.
///
/// The name must be non-empty after trimming and unique among active
/// categories.
///
/// # Errors
/// Returns an error if:
/// - The category name is empty or whitespace-only
/// - An active category with the same name already exists
/// - The database insert operation fails
pub async fn create_category(
    db: &DatabaseConnection,
    name: String,
    description: Option<String>,
    icon: Option<String>,
    display_order: i32,
) -> Result<category::Model> {
    // Validate inputs
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Category name cannot be empty".to_string(),
        });
    }

    if get_category_by_name(db, name.trim()).await?.is_some() {
        return Err(Error::Config {
            message: format!("Category '{}' already exists", name.trim()),
        });
    }

    let now = chrono::Utc::now();

    let cat = category::ActiveModel {
        name: Set(name.trim().to_string()),
        description: Set(description),
        icon: Set(icon),
        display_order: Set(display_order),
        active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    cat.insert(db).await.map_err(Into::into)
}

/// Updates an existing category's name, description, icon, and position.
///
/// # Errors
/// Returns an error if:
/// - The category name is empty or whitespace-only
/// - The category does not exist
/// - The database update operation fails
pub async fn update_category(
    db: &DatabaseConnection,
    category_id: i64,
    new_name: String,
    new_description: Option<String>,
    new_icon: Option<String>,
    new_display_order: i32,
) -> Result<category::Model> {
    if new_name.trim().is_empty() {
        return Err(Error::Config {
            message: "Category name cannot be empty".to_string(),
        });
    }

    let mut cat: category::ActiveModel = Category::find_by_id(category_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::CategoryNotFound {
            name: category_id.to_string(),
        })?
        .into();

    cat.name = Set(new_name.trim().to_string());
    cat.description = Set(new_description);
    cat.icon = Set(new_icon);
    cat.display_order = Set(new_display_order);
    cat.updated_at = Set(chrono::Utc::now());

    cat.update(db).await.map_err(Into::into)
}

/// Activates or deactivates a category.
///
/// Deactivation hides the category from the storefront while preserving its
/// products and order history.
pub async fn set_category_active(
    db: &DatabaseConnection,
    category_id: i64,
    active: bool,
) -> Result<category::Model> {
    let mut cat: category::ActiveModel = Category::find_by_id(category_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::CategoryNotFound {
            name: category_id.to_string(),
        })?
        .into();

    cat.active = Set(active);
    cat.updated_at = Set(chrono::Utc::now());

    cat.update(db).await.map_err(Into::into)
}
