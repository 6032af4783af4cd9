//! Product business logic - Handles all catalog product operations.
//!
//! This module provides functions for creating, retrieving, updating, and managing
//! products within the menu catalog. Products carry the base price copied into the
//! cart at selection time. All functions are async and return Result types for
//! proper error handling throughout the system.

use crate::{
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all available products from the catalog, ordered alphabetically by name.
///
/// This function is commonly used to display the complete storefront listing
/// when no category filter is applied.
pub async fn get_all_available_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .filter(product::Column::Available.eq(true))
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the available products of one category, ordered alphabetically by name.
pub async fn get_products_by_category(
    db: &DatabaseConnection,
    category_id: i64,
) -> Result<Vec<product::Model>> {
    Product::find()
        .filter(product::Column::CategoryId.eq(category_id))
        .filter(product::Column::Available.eq(true))
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a specific product by its name, returning None if not found or unavailable.
pub async fn get_product_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<product::Model>> {
    Product::find()
        .filter(product::Column::Name.eq(name))
        .filter(product::Column::Available.eq(true))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific product by its unique ID.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new product with the specified parameters, performing input validation.
///
/// This function validates that the name is not empty, the price is non-negative
/// and finite, and that the owning category exists.
///
/// # Errors
/// Returns an error if:
/// - The product name is empty or whitespace-only
/// - The price is negative or not finite (NaN, infinity)
/// - The category does not exist
/// - The database insert operation fails
pub async fn create_product(
    db: &DatabaseConnection,
    category_id: i64,
    name: String,
    description: Option<String>,
    price: f64,
    image_url: Option<String>,
) -> Result<product::Model> {
    // Validate inputs
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Product name cannot be empty".to_string(),
        });
    }

    if price < 0.0 || !price.is_finite() {
        return Err(Error::InvalidPrice { price });
    }

    crate::core::category::get_category_by_id(db, category_id)
        .await?
        .ok_or_else(|| Error::CategoryNotFound {
            name: category_id.to_string(),
        })?;

    let now = chrono::Utc::now();

    let product = product::ActiveModel {
        category_id: Set(category_id),
        name: Set(name.trim().to_string()),
        description: Set(description),
        price: Set(price),
        image_url: Set(image_url),
        available: Set(true),
        is_promotion: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    product.insert(db).await.map_err(Into::into)
}

/// Updates an existing product's name, description, price, and image.
///
/// # Errors
/// Returns an error if:
/// - The product name is empty or whitespace-only
/// - The price is negative or not finite (NaN, infinity)
/// - The product does not exist
/// - The database update operation fails
pub async fn update_product(
    db: &DatabaseConnection,
    product_id: i64,
    new_name: String,
    new_description: Option<String>,
    new_price: f64,
    new_image_url: Option<String>,
) -> Result<product::Model> {
    // Validate inputs
    if new_name.trim().is_empty() {
        return Err(Error::Config {
            message: "Product name cannot be empty".to_string(),
        });
    }

    if new_price < 0.0 || !new_price.is_finite() {
        return Err(Error::InvalidPrice { price: new_price });
    }

    let mut product: product::ActiveModel = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::ProductNotFound {
            name: product_id.to_string(),
        })?
        .into();

    product.name = Set(new_name.trim().to_string());
    product.description = Set(new_description);
    product.price = Set(new_price);
    product.image_url = Set(new_image_url);
    product.updated_at = Set(chrono::Utc::now());

    product.update(db).await.map_err(Into::into)
}

/// Makes a product orderable or hides it from the storefront.
///
/// Hiding preserves the product and its order history; existing cart lines
/// are unaffected because they carry price snapshots.
pub async fn set_product_available(
    db: &DatabaseConnection,
    product_id: i64,
    available: bool,
) -> Result<product::Model> {
    let mut product: product::ActiveModel = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::ProductNotFound {
            name: product_id.to_string(),
        })?
        .into();

    product.available = Set(available);
    product.updated_at = Set(chrono::Utc::now());

    product.update(db).await.map_err(Into::into)
}

/// Flags or unflags a product as a promotion.
pub async fn set_product_promotion(
    db: &DatabaseConnection,
    product_id: i64,
    is_promotion: bool,
) -> Result<product::Model> {
    let mut product: product::ActiveModel = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::ProductNotFound {
            name: product_id.to_string(),
        })?
        .into();

    product.is_promotion = Set(is_promotion);
    product.updated_at = Set(chrono::Utc::now());

    product.update(db).await.map_err(Into::into)
}
