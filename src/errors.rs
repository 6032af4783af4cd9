//! Unified error types for the ordering core.
//!
//! Every fallible operation in the crate returns the crate-wide [`Result`]
//! alias. Validation failures carry enough context to be surfaced directly to
//! the storefront or back-office user; infrastructure failures wrap the
//! underlying database error.

use thiserror::Error;

/// All errors produced by the ordering core.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file or configuration value problem
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what is wrong
        message: String,
    },

    /// Database error from the `SeaORM` layer
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A price was negative or not a finite number
    #[error("Invalid price: {price}")]
    InvalidPrice {
        /// The offending price value
        price: f64,
    },

    /// A line item quantity was outside the allowed range (must be >= 1)
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The offending quantity value
        quantity: u32,
    },

    /// Category lookup failed
    #[error("Category not found: {name}")]
    CategoryNotFound {
        /// Name or id of the category that was requested
        name: String,
    },

    /// Product lookup failed
    #[error("Product not found: {name}")]
    ProductNotFound {
        /// Name or id of the product that was requested
        name: String,
    },

    /// Extra group lookup failed
    #[error("Extra group not found: {name}")]
    ExtraNotFound {
        /// Name or id of the extra group that was requested
        name: String,
    },

    /// Order lookup failed
    #[error("Order not found: {id}")]
    OrderNotFound {
        /// Id of the order that was requested
        id: i64,
    },

    /// A required extra group has no selected option
    #[error("Missing required selection for group: {group}")]
    MissingRequiredGroup {
        /// Name of the group that requires a selection
        group: String,
    },

    /// More options were selected from a group than its cap allows
    #[error("Too many selections for group {group} (max {max})")]
    TooManySelections {
        /// Name of the over-selected group
        group: String,
        /// The group's selection cap
        max: i32,
    },

    /// A selection referenced an option that does not belong to the group
    #[error("Unknown option {option_id} for group {group}")]
    UnknownOption {
        /// Name of the group the selection was made against
        group: String,
        /// The unrecognized option id
        option_id: i64,
    },

    /// A mandatory checkout field was left empty
    #[error("Missing customer field: {field}")]
    MissingCustomerField {
        /// Name of the missing field ("name", "phone", "address")
        field: String,
    },

    /// An order was submitted with an empty cart
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// A stored or supplied status string is not a known order status
    #[error("Invalid order status: {status}")]
    InvalidStatus {
        /// The unrecognized status string
        status: String,
    },
}

// Convenience `Result` type
/// Crate-wide result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
