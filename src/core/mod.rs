//! Core business logic - framework-agnostic storefront and back-office operations.
//!
//! The cart and customization modules are synchronous and memory-resident;
//! the catalog, order, and analytics modules are async functions over the
//! `SeaORM` data layer. All of them return the crate-wide `Result` type.

/// In-memory shopping cart: line items, merge semantics, and totals
pub mod cart;
/// Category (menu section) CRUD
pub mod category;
/// Rendering of the order submission message for the external channel
pub mod composer;
/// Product customization: selection validation, pricing, and line item building
pub mod customize;
/// Extra group and option CRUD plus the customization view query
pub mod extra;
/// Order placement, status tracking, and back-office queries
pub mod order;
/// Product CRUD
pub mod product;
/// Sales analytics aggregation and CSV export
pub mod stats;
