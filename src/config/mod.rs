/// Database configuration and connection management
pub mod database;

/// Menu seed configuration loading from menu.toml
pub mod menu;

/// Storefront settings loading from settings.toml and environment variables
pub mod settings;
