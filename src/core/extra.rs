//! Extra group business logic - Handles customization option groups and options.
//!
//! Extra groups belong to a category and are offered for every product in it.
//! This module provides the back-office CRUD for groups and their options and
//! the storefront query that assembles [`ExtraGroupView`]s for the
//! customization flow.

use crate::{
    core::customize::{ExtraGroupView, ExtraOptionView},
    entities::{Extra, extra, extra_option},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves the active extra groups of a category, ordered by name.
pub async fn get_extras_for_category(
    db: &DatabaseConnection,
    category_id: i64,
) -> Result<Vec<extra::Model>> {
    Extra::find()
        .filter(extra::Column::CategoryId.eq(category_id))
        .filter(extra::Column::Active.eq(true))
        .order_by_asc(extra::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an active extra group of a category by name, returning None if absent.
pub async fn get_extra_by_name(
    db: &DatabaseConnection,
    category_id: i64,
    name: &str,
) -> Result<Option<extra::Model>> {
    Extra::find()
        .filter(extra::Column::CategoryId.eq(category_id))
        .filter(extra::Column::Name.eq(name))
        .filter(extra::Column::Active.eq(true))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific extra group by its unique ID.
pub async fn get_extra_by_id(
    db: &DatabaseConnection,
    extra_id: i64,
) -> Result<Option<extra::Model>> {
    Extra::find_by_id(extra_id).one(db).await.map_err(Into::into)
}

/// Assembles the active extra groups of a category together with their active
/// options, in the shape the customization flow consumes.
///
/// Groups without any active option are still returned; a required group with
/// no options would make every product of the category unorderable, which the
/// back office can detect from this same listing.
pub async fn get_active_extras_with_options(
    db: &DatabaseConnection,
    category_id: i64,
) -> Result<Vec<ExtraGroupView>> {
    let groups = Extra::find()
        .filter(extra::Column::CategoryId.eq(category_id))
        .filter(extra::Column::Active.eq(true))
        .order_by_asc(extra::Column::Name)
        .find_with_related(crate::entities::ExtraOption)
        .all(db)
        .await?;

    let views = groups
        .into_iter()
        .map(|(group, options)| ExtraGroupView {
            extra_id: group.id,
            name: group.name,
            required: group.required,
            max_selections: group.max_selections,
            options: options
                .into_iter()
                .filter(|o| o.active)
                .map(|o| ExtraOptionView {
                    option_id: o.id,
                    name: o.name,
                    price: o.price,
                })
                .collect(),
        })
        .collect();

    Ok(views)
}

/// Creates a new extra group for a category, performing input validation.
///
/// # Errors
/// Returns an error if:
/// - The group name is empty or whitespace-only
/// - `max_selections` is less than 1
/// - The category does not exist
/// - The database insert operation fails
pub async fn create_extra(
    db: &DatabaseConnection,
    category_id: i64,
    name: String,
    required: bool,
    max_selections: i32,
) -> Result<extra::Model> {
    // Validate inputs
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Extra group name cannot be empty".to_string(),
        });
    }

    if max_selections < 1 {
        return Err(Error::Config {
            message: format!("max_selections must be at least 1, got {max_selections}"),
        });
    }

    crate::core::category::get_category_by_id(db, category_id)
        .await?
        .ok_or_else(|| Error::CategoryNotFound {
            name: category_id.to_string(),
        })?;

    let now = chrono::Utc::now();

    let group = extra::ActiveModel {
        category_id: Set(category_id),
        name: Set(name.trim().to_string()),
        required: Set(required),
        max_selections: Set(max_selections),
        active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    group.insert(db).await.map_err(Into::into)
}

/// Updates an existing extra group's name and constraints.
pub async fn update_extra(
    db: &DatabaseConnection,
    extra_id: i64,
    new_name: String,
    new_required: bool,
    new_max_selections: i32,
) -> Result<extra::Model> {
    if new_name.trim().is_empty() {
        return Err(Error::Config {
            message: "Extra group name cannot be empty".to_string(),
        });
    }

    if new_max_selections < 1 {
        return Err(Error::Config {
            message: format!("max_selections must be at least 1, got {new_max_selections}"),
        });
    }

    let mut group: extra::ActiveModel = Extra::find_by_id(extra_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::ExtraNotFound {
            name: extra_id.to_string(),
        })?
        .into();

    group.name = Set(new_name.trim().to_string());
    group.required = Set(new_required);
    group.max_selections = Set(new_max_selections);
    group.updated_at = Set(chrono::Utc::now());

    group.update(db).await.map_err(Into::into)
}

/// Activates or deactivates an extra group.
pub async fn set_extra_active(
    db: &DatabaseConnection,
    extra_id: i64,
    active: bool,
) -> Result<extra::Model> {
    let mut group: extra::ActiveModel = Extra::find_by_id(extra_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::ExtraNotFound {
            name: extra_id.to_string(),
        })?
        .into();

    group.active = Set(active);
    group.updated_at = Set(chrono::Utc::now());

    group.update(db).await.map_err(Into::into)
}

/// Creates a new option inside an extra group, performing input validation.
///
/// # Errors
/// Returns an error if:
/// - The option name is empty or whitespace-only
/// - The price is negative or not finite (NaN, infinity)
/// - The extra group does not exist
/// - The database insert operation fails
pub async fn create_extra_option(
    db: &DatabaseConnection,
    extra_id: i64,
    name: String,
    price: f64,
) -> Result<extra_option::Model> {
    // Validate inputs
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Option name cannot be empty".to_string(),
        });
    }

    if price < 0.0 || !price.is_finite() {
        return Err(Error::InvalidPrice { price });
    }

    get_extra_by_id(db, extra_id)
        .await?
        .ok_or_else(|| Error::ExtraNotFound {
            name: extra_id.to_string(),
        })?;

    let option = extra_option::ActiveModel {
        extra_id: Set(extra_id),
        name: Set(name.trim().to_string()),
        price: Set(price),
        active: Set(true),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    option.insert(db).await.map_err(Into::into)
}

/// Activates or deactivates a single option of an extra group.
pub async fn set_extra_option_active(
    db: &DatabaseConnection,
    option_id: i64,
    active: bool,
) -> Result<extra_option::Model> {
    let mut option: extra_option::ActiveModel =
        crate::entities::ExtraOption::find_by_id(option_id)
            .one(db)
            .await?
            .ok_or_else(|| Error::ExtraNotFound {
                name: option_id.to_string(),
            })?
            .into();

    option.active = Set(active);

    option.update(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{create_test_extra, create_test_option, setup_with_category};

    #[tokio::test]
    async fn test_create_extra_validation() -> Result<()> {
        let (db, category) = setup_with_category().await?;

        let result = create_extra(&db, category.id, String::new(), false, 1).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        let result = create_extra(&db, category.id, "Cheese".to_string(), false, 0).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_extra_requires_category() -> Result<()> {
        let db = crate::test_utils::setup_test_db().await?;

        let result = create_extra(&db, 999, "Cheese".to_string(), false, 1).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::CategoryNotFound { name: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_option_validation() -> Result<()> {
        let (db, category) = setup_with_category().await?;
        let group = create_test_extra(&db, category.id, "Cheese", false, 2).await?;

        let result = create_extra_option(&db, group.id, String::new(), 1.0).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        let result = create_extra_option(&db, group.id, "Cheddar".to_string(), -1.0).await;
        assert!(matches!(result.unwrap_err(), Error::InvalidPrice { .. }));

        let result = create_extra_option(&db, 999, "Cheddar".to_string(), 1.0).await;
        assert!(matches!(result.unwrap_err(), Error::ExtraNotFound { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_extras_with_options_view() -> Result<()> {
        let (db, category) = setup_with_category().await?;
        let group = create_test_extra(&db, category.id, "Cheese", false, 2).await?;
        create_test_option(&db, group.id, "Cheddar", 1.5).await?;
        let retired = create_test_option(&db, group.id, "Gouda", 1.0).await?;
        set_extra_option_active(&db, retired.id, false).await?;

        let views = get_active_extras_with_options(&db, category.id).await?;
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].name, "Cheese");
        assert_eq!(views[0].max_selections, 2);
        // Inactive options are filtered out of the storefront view
        assert_eq!(views[0].options.len(), 1);
        assert_eq!(views[0].options[0].name, "Cheddar");
        assert_eq!(views[0].options[0].price, 1.5);

        Ok(())
    }

    #[tokio::test]
    async fn test_deactivated_group_is_not_offered() -> Result<()> {
        let (db, category) = setup_with_category().await?;
        let group = create_test_extra(&db, category.id, "Cheese", true, 1).await?;
        create_test_option(&db, group.id, "Cheddar", 1.5).await?;

        set_extra_active(&db, group.id, false).await?;

        assert!(
            get_active_extras_with_options(&db, category.id)
                .await?
                .is_empty()
        );
        assert!(get_extras_for_category(&db, category.id).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_update_extra() -> Result<()> {
        let (db, category) = setup_with_category().await?;
        let group = create_test_extra(&db, category.id, "Chese", false, 1).await?;

        let updated = update_extra(&db, group.id, "Cheese".to_string(), true, 3).await?;

        assert_eq!(updated.name, "Cheese");
        assert!(updated.required);
        assert_eq!(updated.max_selections, 3);

        Ok(())
    }
}
