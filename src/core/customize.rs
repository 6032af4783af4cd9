//! Product customization - Builds validated cart line items.
//!
//! This module turns a product snapshot, a quantity, and the customer's
//! selections from the category's extra groups into a cart [`LineItem`].
//! Selections are validated against the groups' `required` and
//! `max_selections` constraints before any pricing happens; the storefront
//! UI is expected to prevent over-selection interactively, but the factory
//! rejects invalid input regardless.

use crate::{
    core::cart::{AddOn, LineItem},
    entities::product,
    errors::{Error, Result},
};
use std::collections::HashMap;

/// Snapshot of a catalog product at selection time.
///
/// Copied, not referenced: later catalog edits must not change what the
/// customer saw when they made the selection.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductSnapshot {
    /// Catalog id of the product
    pub product_id: i64,
    /// Product name at selection time
    pub name: String,
    /// Base price per unit at selection time
    pub base_price: f64,
}

impl From<&product::Model> for ProductSnapshot {
    fn from(model: &product::Model) -> Self {
        Self {
            product_id: model.id,
            name: model.name.clone(),
            base_price: model.price,
        }
    }
}

/// An extra group as offered during customization, with its active options.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtraGroupView {
    /// Catalog id of the group
    pub extra_id: i64,
    /// Display name of the group
    pub name: String,
    /// Whether at least one option must be selected
    pub required: bool,
    /// Maximum number of selectable options
    pub max_selections: i32,
    /// The group's selectable options
    pub options: Vec<ExtraOptionView>,
}

/// One selectable option inside an [`ExtraGroupView`].
#[derive(Clone, Debug, PartialEq)]
pub struct ExtraOptionView {
    /// Catalog id of the option
    pub option_id: i64,
    /// Display name of the option
    pub name: String,
    /// Price added per unit when selected
    pub price: f64,
}

/// The customer's selections, keyed by extra group id.
pub type GroupSelections = HashMap<i64, Vec<i64>>;

/// Validates selections against the offered groups.
///
/// Every `required` group needs at least one selection, no group may exceed
/// its `max_selections` cap, every selected option must belong to its group,
/// and selections may not reference groups that were not offered.
pub fn validate_selections(groups: &[ExtraGroupView], selections: &GroupSelections) -> Result<()> {
    for group in groups {
        let selected = selections.get(&group.extra_id).map_or(&[][..], Vec::as_slice);

        if group.required && selected.is_empty() {
            return Err(Error::MissingRequiredGroup {
                group: group.name.clone(),
            });
        }

        if selected.len() > usize::try_from(group.max_selections).unwrap_or(0) {
            return Err(Error::TooManySelections {
                group: group.name.clone(),
                max: group.max_selections,
            });
        }

        for option_id in selected {
            if !group.options.iter().any(|o| o.option_id == *option_id) {
                return Err(Error::UnknownOption {
                    group: group.name.clone(),
                    option_id: *option_id,
                });
            }
        }
    }

    for group_id in selections.keys() {
        if !groups.iter().any(|g| g.extra_id == *group_id) {
            return Err(Error::ExtraNotFound {
                name: group_id.to_string(),
            });
        }
    }

    Ok(())
}

/// Resolves validated selections into cart add-ons, labelled
/// `"Group: Option"`, in group order then option order.
#[must_use]
pub fn selected_add_ons(groups: &[ExtraGroupView], selections: &GroupSelections) -> Vec<AddOn> {
    let mut add_ons = Vec::new();

    for group in groups {
        let Some(selected) = selections.get(&group.extra_id) else {
            continue;
        };
        for option in &group.options {
            if selected.contains(&option.option_id) {
                add_ons.push(AddOn {
                    option_id: option.option_id,
                    label: format!("{}: {}", group.name, option.name),
                    price: option.price,
                });
            }
        }
    }

    add_ons
}

/// Total price for a quantity of a product with the given add-ons:
/// `quantity * (base_price + sum of add-on prices)`.
#[must_use]
pub fn compute_total(base_price: f64, quantity: u32, add_ons: &[AddOn]) -> f64 {
    let unit = base_price + add_ons.iter().map(|a| a.price).sum::<f64>();
    unit * f64::from(quantity)
}

/// Builds a validated cart line item from a product snapshot, a quantity,
/// the category's extra groups, and the customer's selections.
///
/// Free-text instructions are trimmed; an empty or whitespace-only string is
/// stored as absent so that "no instructions" has a single representation.
///
/// # Errors
/// Returns an error if:
/// - The quantity is zero
/// - The base price is negative or not finite
/// - A required group has no selection, a group's cap is exceeded, or a
///   selection references an unknown group or option
pub fn build_line_item(
    product: &ProductSnapshot,
    quantity: u32,
    groups: &[ExtraGroupView],
    selections: &GroupSelections,
    special_instructions: Option<String>,
) -> Result<LineItem> {
    if quantity == 0 {
        return Err(Error::InvalidQuantity { quantity });
    }

    if product.base_price < 0.0 || !product.base_price.is_finite() {
        return Err(Error::InvalidPrice {
            price: product.base_price,
        });
    }

    validate_selections(groups, selections)?;

    let add_ons = selected_add_ons(groups, selections);
    let instructions = special_instructions
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    Ok(LineItem::new(
        product.product_id,
        product.name.clone(),
        product.base_price,
        quantity,
        add_ons,
        instructions,
    ))
}
