//! Shopping cart - Holds the line items of the active storefront session.
//!
//! The cart is memory-resident only: it is created empty when a session
//! starts, mutated in direct response to user actions, and cleared after a
//! successful order submission. It is an explicitly owned value handed to
//! whoever needs it, never a global. Every line item stores its per-unit
//! price (base price plus add-ons) so totals are always derived as
//! `unit_price * quantity`; quantity changes never divide by the old
//! quantity and can never divide by zero.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// A priced add-on attached to a cart line item.
///
/// Add-ons are copied from the catalog at customization time and are
/// immutable afterwards; each line item owns its add-ons exclusively.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    /// Catalog id of the option this add-on was built from
    pub option_id: i64,
    /// Display label, e.g. "Cheese: Extra cheese"
    pub label: String,
    /// Price added per unit of the line item
    pub price: f64,
}

/// One cart entry: a product selection with its customizations and quantity.
///
/// The product name and prices are snapshots taken at selection time, so
/// later catalog edits never retroactively change cart contents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Identifier unique within the cart, generated fresh per line.
    /// Distinct from the catalog product id so two customizations of the
    /// same product can coexist as separate lines.
    pub id: Uuid,
    /// Catalog id of the underlying product
    pub product_id: i64,
    /// Product name at selection time
    pub name: String,
    /// Product base price at selection time, before add-ons
    pub base_price: f64,
    /// Per-unit price: base price plus the sum of add-on prices
    pub unit_price: f64,
    /// Number of units, always >= 1
    pub quantity: u32,
    /// Add-ons chosen for this line, possibly empty
    pub add_ons: Vec<AddOn>,
    /// Optional free-text preparation instructions. `None` means no
    /// instructions were given; an empty string is never stored.
    pub special_instructions: Option<String>,
}

impl LineItem {
    /// Builds a line item from a product snapshot and its chosen add-ons,
    /// generating a fresh cart-unique id and deriving the per-unit price.
    #[must_use]
    pub fn new(
        product_id: i64,
        name: String,
        base_price: f64,
        quantity: u32,
        add_ons: Vec<AddOn>,
        special_instructions: Option<String>,
    ) -> Self {
        let unit_price = base_price + add_ons.iter().map(|a| a.price).sum::<f64>();
        Self {
            id: Uuid::new_v4(),
            product_id,
            name,
            base_price,
            unit_price,
            quantity,
            add_ons,
            special_instructions,
        }
    }

    /// Total price for the full quantity, including add-ons.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    /// Sorted add-on option ids, used for order-insensitive equivalence.
    fn add_on_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.add_ons.iter().map(|a| a.option_id).collect();
        ids.sort_unstable();
        ids
    }

    /// Whether a newly added candidate should merge into this line.
    ///
    /// Two lines are equivalent when they refer to the same product with the
    /// same add-on set (in any order), the same instructions (both absent
    /// counts as equal), and the same per-unit price. Selections of the same
    /// product made across a catalog price change carry different snapshots
    /// and stay separate lines.
    #[allow(clippy::float_cmp)]
    fn merges_with(&self, other: &Self) -> bool {
        self.product_id == other.product_id
            && self.unit_price == other.unit_price
            && self.special_instructions == other.special_instructions
            && self.add_on_ids() == other.add_on_ids()
    }
}

/// The cart of the active session: an ordered sequence of line items,
/// unique by line id, with the only mutation surface for them.
#[derive(Debug, Default)]
pub struct CartStore {
    items: Vec<LineItem>,
}

impl CartStore {
    /// Creates an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds a candidate line item, merging it into an equivalent existing
    /// line when one exists.
    ///
    /// On merge the existing line's quantity grows by the candidate's
    /// quantity and its total follows from the shared unit price, so the
    /// cart total grows by exactly the candidate's total either way. The
    /// cart length grows by at most one.
    pub fn add(&mut self, candidate: LineItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.merges_with(&candidate)) {
            existing.quantity += candidate.quantity;
            debug!(
                product = %existing.name,
                quantity = existing.quantity,
                "merged candidate into existing cart line"
            );
        } else {
            debug!(product = %candidate.name, quantity = candidate.quantity, "appended cart line");
            self.items.push(candidate);
        }
    }

    /// Removes the line with the given id. Silently does nothing when the id
    /// is absent, so repeated removal (e.g. a double click) is harmless.
    pub fn remove(&mut self, line_id: Uuid) {
        self.items.retain(|i| i.id != line_id);
    }

    /// Sets the quantity of the line with the given id.
    ///
    /// A quantity of zero removes the line. The total follows from the
    /// stored per-unit price, so no stored line can ever hold a zero
    /// quantity. Silently does nothing when the id is absent.
    pub fn update_quantity(&mut self, line_id: Uuid, quantity: u32) {
        if quantity == 0 {
            self.remove(line_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.id == line_id) {
            item.quantity = quantity;
        }
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Read-only ordered view of the current line items.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Sum of all line item totals.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(LineItem::total_price).sum()
    }

    /// Sum of all line item quantities.
    #[must_use]
    pub fn total_item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}
