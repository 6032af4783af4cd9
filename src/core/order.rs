//! Order business logic - Captures submitted orders and tracks their status.
//!
//! Placing an order snapshots the cart into `orders`, `order_items`, and
//! `order_item_extras` rows inside one database transaction, so a failed
//! submission leaves nothing behind and the cart stays populated for retry.
//! The caller clears the cart only after placement returns successfully.
//! The back office then advances each order through its status until it is
//! delivered or cancelled.

use crate::{
    core::cart::CartStore,
    entities::{Order, OrderItem, order, order_item, order_item_extra},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::info;

/// Fulfilment status of an order, stored as a string in the database.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    /// Just placed, not yet acknowledged by the kitchen
    Pending,
    /// Being prepared
    Preparing,
    /// Ready for pickup or dispatch
    Ready,
    /// Handed over to the customer
    Delivered,
    /// Cancelled by the business or the customer
    Cancelled,
}

impl OrderStatus {
    /// The database string encoding of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a database or user-supplied status string.
    pub fn parse(status: &str) -> Result<Self> {
        match status {
            "pending" => Ok(Self::Pending),
            "preparing" => Ok(Self::Preparing),
            "ready" => Ok(Self::Ready),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(Error::InvalidStatus {
                status: status.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an order is handed over to the customer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeliveryMethod {
    /// The customer picks the order up at the counter
    Pickup,
    /// The order is delivered to the customer's address
    Delivery,
}

impl DeliveryMethod {
    /// The database string encoding of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Delivery => "delivery",
        }
    }
}

/// How an order is paid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Cash on handover
    Cash,
    /// Bank transfer before handover
    Transfer,
}

impl PaymentMethod {
    /// The database string encoding of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Transfer => "transfer",
        }
    }
}

/// Customer details collected at checkout.
///
/// The email is relayed in the submission message but not persisted with the
/// order; the original checkout form treats it as contact convenience only.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckoutDetails {
    /// Customer's full name (required)
    pub customer_name: String,
    /// Customer's contact phone (required)
    pub customer_phone: String,
    /// Customer's email, optional
    pub customer_email: Option<String>,
    /// Delivery address, required when `delivery_method` is `Delivery`
    pub customer_address: Option<String>,
    /// How the order is handed over
    pub delivery_method: DeliveryMethod,
    /// How the order is paid
    pub payment_method: PaymentMethod,
    /// Optional free-text notes for the whole order
    pub notes: Option<String>,
}

/// Validates checkout details before an order is placed.
///
/// # Errors
/// Returns [`Error::MissingCustomerField`] naming the first missing field:
/// name and phone are always required, the address only for delivery orders.
pub fn validate_checkout(details: &CheckoutDetails) -> Result<()> {
    if details.customer_name.trim().is_empty() {
        return Err(Error::MissingCustomerField {
            field: "name".to_string(),
        });
    }

    if details.customer_phone.trim().is_empty() {
        return Err(Error::MissingCustomerField {
            field: "phone".to_string(),
        });
    }

    if details.delivery_method == DeliveryMethod::Delivery
        && details
            .customer_address
            .as_deref()
            .is_none_or(|a| a.trim().is_empty())
    {
        return Err(Error::MissingCustomerField {
            field: "address".to_string(),
        });
    }

    Ok(())
}

/// Places an order by snapshotting the cart into the database.
///
/// The order, its items, and their recorded add-ons are written in a single
/// database transaction. The cart itself is not touched: the caller clears it
/// after this returns `Ok`, so a failed handoff leaves the cart populated and
/// the customer can simply retry.
///
/// # Errors
/// Returns an error if:
/// - The cart is empty
/// - A required checkout field is missing
/// - Any database operation fails (nothing is persisted in that case)
pub async fn place_order(
    db: &DatabaseConnection,
    cart: &CartStore,
    details: &CheckoutDetails,
) -> Result<order::Model> {
    if cart.is_empty() {
        return Err(Error::EmptyCart);
    }

    validate_checkout(details)?;

    // Use a transaction to ensure atomicity
    let txn = db.begin().await?;

    let now = chrono::Utc::now();
    let order_model = order::ActiveModel {
        customer_name: Set(details.customer_name.trim().to_string()),
        customer_phone: Set(details.customer_phone.trim().to_string()),
        customer_address: Set(details.customer_address.clone()),
        delivery_method: Set(details.delivery_method.as_str().to_string()),
        payment_method: Set(details.payment_method.as_str().to_string()),
        notes: Set(details.notes.clone()),
        status: Set(OrderStatus::Pending.as_str().to_string()),
        total_amount: Set(cart.total_price()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let placed = order_model.insert(&txn).await?;

    for line in cart.items() {
        let item_model = order_item::ActiveModel {
            order_id: Set(placed.id),
            product_id: Set(line.product_id),
            product_name: Set(line.name.clone()),
            quantity: Set(i32::try_from(line.quantity).unwrap_or(i32::MAX)),
            unit_price: Set(line.unit_price),
            total_price: Set(line.total_price()),
            special_instructions: Set(line.special_instructions.clone()),
            created_at: Set(now),
            ..Default::default()
        };
        let item = item_model.insert(&txn).await?;

        for add_on in &line.add_ons {
            let extra_model = order_item_extra::ActiveModel {
                order_item_id: Set(item.id),
                option_id: Set(Some(add_on.option_id)),
                label: Set(add_on.label.clone()),
                unit_price: Set(add_on.price),
                ..Default::default()
            };
            extra_model.insert(&txn).await?;
        }
    }

    // Commit the transaction
    txn.commit().await?;

    info!(
        order_id = placed.id,
        total = placed.total_amount,
        items = cart.len(),
        "order placed"
    );

    Ok(placed)
}

/// Sets the status of an existing order.
///
/// The back office may set any status; no transition graph is enforced.
///
/// # Errors
/// Returns [`Error::OrderNotFound`] when the id is unknown.
pub async fn update_order_status(
    db: &DatabaseConnection,
    order_id: i64,
    status: OrderStatus,
) -> Result<order::Model> {
    let mut order: order::ActiveModel = Order::find_by_id(order_id)
        .one(db)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })?
        .into();

    order.status = Set(status.as_str().to_string());
    order.updated_at = Set(chrono::Utc::now());

    let updated = order.update(db).await?;
    info!(order_id, status = %status, "order status updated");
    Ok(updated)
}

/// Retrieves a specific order by its unique ID.
pub async fn get_order_by_id(
    db: &DatabaseConnection,
    order_id: i64,
) -> Result<Option<order::Model>> {
    Order::find_by_id(order_id).one(db).await.map_err(Into::into)
}

/// Retrieves all orders, newest first, for the back-office table.
pub async fn get_recent_orders(db: &DatabaseConnection) -> Result<Vec<order::Model>> {
    Order::find()
        .order_by_desc(order::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the orders currently in the given status, newest first.
pub async fn get_orders_by_status(
    db: &DatabaseConnection,
    status: OrderStatus,
) -> Result<Vec<order::Model>> {
    Order::find()
        .filter(order::Column::Status.eq(status.as_str()))
        .order_by_desc(order::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the line items recorded for an order.
pub async fn get_order_items(
    db: &DatabaseConnection,
    order_id: i64,
) -> Result<Vec<order_item::Model>> {
    OrderItem::find()
        .filter(order_item::Column::OrderId.eq(order_id))
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the add-ons recorded for an order item.
pub async fn get_order_item_extras(
    db: &DatabaseConnection,
    order_item_id: i64,
) -> Result<Vec<order_item_extra::Model>> {
    crate::entities::OrderItemExtra::find()
        .filter(order_item_extra::Column::OrderItemId.eq(order_item_id))
        .all(db)
        .await
        .map_err(Into::into)
}
