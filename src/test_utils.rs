//! Shared test utilities for `OrderPad`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    config::settings::StorefrontSettings,
    core::{category, extra, order, product},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test category with sensible defaults.
///
/// # Arguments
/// * `db` - Database connection
/// * `name` - Category name
///
/// # Defaults
/// * `description`: None
/// * `icon`: None
/// * `display_order`: 0
pub async fn create_test_category(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::category::Model> {
    category::create_category(db, name.to_string(), None, None, 0).await
}

/// Creates a test product with sensible defaults.
///
/// # Arguments
/// * `db` - Database connection
/// * `name` - Product name
/// * `category_id` - Associated category ID
///
/// # Defaults
/// * price: 10.0
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    category_id: i64,
) -> Result<entities::product::Model> {
    product::create_product(db, category_id, name.to_string(), None, 10.0, None).await
}

/// Creates a test product with custom price.
pub async fn create_custom_product(
    db: &DatabaseConnection,
    name: &str,
    price: f64,
    category_id: i64,
) -> Result<entities::product::Model> {
    product::create_product(db, category_id, name.to_string(), None, price, None).await
}

/// Creates a test extra group with custom constraints.
pub async fn create_test_extra(
    db: &DatabaseConnection,
    category_id: i64,
    name: &str,
    required: bool,
    max_selections: i32,
) -> Result<entities::extra::Model> {
    extra::create_extra(db, category_id, name.to_string(), required, max_selections).await
}

/// Creates a test option inside an extra group.
pub async fn create_test_option(
    db: &DatabaseConnection,
    extra_id: i64,
    name: &str,
    price: f64,
) -> Result<entities::extra_option::Model> {
    extra::create_extra_option(db, extra_id, name.to_string(), price).await
}

/// Sets up a complete test environment with a category.
/// Returns (db, category) for common test scenarios.
pub async fn setup_with_category() -> Result<(DatabaseConnection, entities::category::Model)> {
    let db = setup_test_db().await?;
    let category = create_test_category(&db, "Test Category").await?;
    Ok((db, category))
}

/// Sets up a complete test environment with a category and a product.
/// Returns (db, category, product) for product-related tests.
pub async fn setup_with_product() -> Result<(
    DatabaseConnection,
    entities::category::Model,
    entities::product::Model,
)> {
    let db = setup_test_db().await?;
    let category = create_test_category(&db, "Test Category").await?;
    let product = create_test_product(&db, "Test Product", category.id).await?;
    Ok((db, category, product))
}

/// Checkout details for a pickup order paid in cash, the simplest valid case.
#[must_use]
pub fn pickup_checkout() -> order::CheckoutDetails {
    order::CheckoutDetails {
        customer_name: "Alice Example".to_string(),
        customer_phone: "5491100000000".to_string(),
        customer_email: None,
        customer_address: None,
        delivery_method: order::DeliveryMethod::Pickup,
        payment_method: order::PaymentMethod::Cash,
        notes: None,
    }
}

/// Storefront settings used by composer tests.
#[must_use]
pub fn test_settings() -> StorefrontSettings {
    StorefrontSettings {
        business_name: "Corner Grill".to_string(),
        order_phone: "5491100000000".to_string(),
        transfer_alias: "CORNER.GRILL".to_string(),
    }
}
