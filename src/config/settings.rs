//! Storefront settings loading from settings.toml
//!
//! This module loads the business-facing settings consumed by the order
//! composer: the business name printed in the submission message, the phone
//! number orders are sent to, and the bank transfer alias shown to customers
//! paying by transfer. The phone number may be overridden with the
//! `ORDER_PHONE` environment variable so deployments can swap it without
//! editing the settings file.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Settings consumed by the storefront and the order composer
#[derive(Debug, Deserialize, Clone)]
pub struct StorefrontSettings {
    /// Business name printed in the order submission message
    pub business_name: String,
    /// Phone number the pre-formatted order message is addressed to
    pub order_phone: String,
    /// Bank alias shown to customers paying by transfer
    pub transfer_alias: String,
}

/// Loads storefront settings from a TOML file
///
/// # Arguments
/// * `path` - Path to the settings.toml file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<StorefrontSettings> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read settings file: {e}"),
    })?;

    let mut settings: StorefrontSettings =
        toml::from_str(&contents).map_err(|e| Error::Config {
            message: format!("Failed to parse settings.toml: {e}"),
        })?;

    if let Ok(phone) = std::env::var("ORDER_PHONE") {
        tracing::debug!("overriding order phone from ORDER_PHONE environment variable");
        settings.order_phone = phone;
    }

    Ok(settings)
}

/// Loads storefront settings from the default location (./settings.toml)
pub fn load_default_settings() -> Result<StorefrontSettings> {
    load_settings("settings.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_settings() {
        let toml_str = r#"
            business_name = "Corner Grill"
            order_phone = "5491100000000"
            transfer_alias = "CORNER.GRILL"
        "#;

        let settings: StorefrontSettings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.business_name, "Corner Grill");
        assert_eq!(settings.order_phone, "5491100000000");
        assert_eq!(settings.transfer_alias, "CORNER.GRILL");
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let toml_str = r#"
            business_name = "Corner Grill"
        "#;

        let result: std::result::Result<StorefrontSettings, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }
}
