//! Order message composition - Renders the cart into the submission message.
//!
//! The storefront hands the finished order to an external messaging channel
//! as pre-formatted text. This module renders that text from the storefront
//! settings, the cart contents, and the checkout details. It is a pure
//! function of its inputs; URL building and actual delivery belong to the
//! embedding UI, and the cart is cleared by the caller only after the
//! handoff succeeds.

use crate::{
    config::settings::StorefrontSettings,
    core::{
        cart::CartStore,
        order::{CheckoutDetails, DeliveryMethod, PaymentMethod},
    },
};
use std::fmt::Write as _;

/// Formats a money amount with the currency marker and two decimals.
#[must_use]
pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Renders the full order submission message.
///
/// Layout: business header, customer block, delivery and payment blocks, one
/// numbered block per line item (quantity, add-on labels, instructions,
/// subtotal), the grand total, transfer details when paying by transfer, and
/// any additional notes.
#[must_use]
pub fn compose_order_message(
    settings: &StorefrontSettings,
    cart: &CartStore,
    details: &CheckoutDetails,
) -> String {
    let mut message = format!("🍽️ *NEW ORDER - {}*\n\n", settings.business_name);

    // Customer info
    let _ = writeln!(message, "👤 *Customer:* {}", details.customer_name);
    let _ = writeln!(message, "📱 *Phone:* {}", details.customer_phone);
    if let Some(email) = &details.customer_email {
        let _ = writeln!(message, "📧 *Email:* {email}");
    }

    // Delivery info
    match details.delivery_method {
        DeliveryMethod::Pickup => {
            message.push_str("\n🚚 *Delivery:* Pickup at the counter\n");
        }
        DeliveryMethod::Delivery => {
            message.push_str("\n🚚 *Delivery:* Home delivery\n");
            if let Some(address) = &details.customer_address {
                let _ = writeln!(message, "📍 *Address:* {address}");
            }
        }
    }

    // Payment info
    let payment = match details.payment_method {
        PaymentMethod::Cash => "Cash",
        PaymentMethod::Transfer => "Bank transfer",
    };
    let _ = writeln!(message, "💳 *Payment:* {payment}");

    // Order details
    message.push_str("\n📋 *ORDER:*\n");
    for (index, item) in cart.items().iter().enumerate() {
        let _ = write!(
            message,
            "\n{}. *{}* (x{})\n",
            index + 1,
            item.name,
            item.quantity
        );
        if !item.add_ons.is_empty() {
            let labels: Vec<&str> = item.add_ons.iter().map(|a| a.label.as_str()).collect();
            let _ = writeln!(message, "   Extras: {}", labels.join(", "));
        }
        if let Some(instructions) = &item.special_instructions {
            let _ = writeln!(message, "   Instructions: {instructions}");
        }
        let _ = writeln!(message, "   Subtotal: {}", format_money(item.total_price()));
    }

    let _ = write!(
        message,
        "\n💰 *TOTAL: {}*\n",
        format_money(cart.total_price())
    );

    if details.payment_method == PaymentMethod::Transfer {
        message.push_str("\n🏦 *Transfer details:*\n");
        let _ = writeln!(message, "Alias: {}", settings.transfer_alias);
        message.push_str("⚠️ *Please send the payment receipt*\n");
    }

    if let Some(notes) = &details.notes {
        let _ = write!(message, "\n📝 *Additional notes:* {notes}\n");
    }

    message.push_str("\nThank you for your order! 🙏");

    message
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        core::cart::{AddOn, LineItem},
        test_utils::{pickup_checkout, test_settings},
    };

    fn sample_cart() -> CartStore {
        let mut cart = CartStore::new();
        cart.add(LineItem::new(
            1,
            "Burger".to_string(),
            10.0,
            3,
            vec![AddOn {
                option_id: 10,
                label: "Cheese: Cheddar".to_string(),
                price: 1.5,
            }],
            Some("no onions".to_string()),
        ));
        cart.add(LineItem::new(2, "Cola".to_string(), 2.5, 2, vec![], None));
        cart
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(11.5), "$11.50");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(1234.567), "$1234.57");
    }

    #[test]
    fn test_message_contains_all_blocks() {
        let cart = sample_cart();
        let message = compose_order_message(&test_settings(), &cart, &pickup_checkout());

        assert!(message.contains("NEW ORDER - Corner Grill"));
        assert!(message.contains("*Customer:* Alice Example"));
        assert!(message.contains("*Phone:* 5491100000000"));
        assert!(message.contains("Pickup at the counter"));
        assert!(message.contains("*Payment:* Cash"));
        assert!(message.contains("1. *Burger* (x3)"));
        assert!(message.contains("Extras: Cheese: Cheddar"));
        assert!(message.contains("Instructions: no onions"));
        assert!(message.contains("Subtotal: $34.50"));
        assert!(message.contains("2. *Cola* (x2)"));
        assert!(message.contains("*TOTAL: $39.50*"));
        // No transfer block for cash orders
        assert!(!message.contains("Transfer details"));
    }

    #[test]
    fn test_transfer_orders_include_alias_block() {
        let cart = sample_cart();
        let mut details = pickup_checkout();
        details.payment_method = PaymentMethod::Transfer;

        let message = compose_order_message(&test_settings(), &cart, &details);

        assert!(message.contains("*Payment:* Bank transfer"));
        assert!(message.contains("Alias: CORNER.GRILL"));
        assert!(message.contains("Please send the payment receipt"));
    }

    #[test]
    fn test_delivery_orders_include_address() {
        let cart = sample_cart();
        let mut details = pickup_checkout();
        details.delivery_method = DeliveryMethod::Delivery;
        details.customer_address = Some("Main St 123".to_string());
        details.notes = Some("ring twice".to_string());

        let message = compose_order_message(&test_settings(), &cart, &details);

        assert!(message.contains("Home delivery"));
        assert!(message.contains("*Address:* Main St 123"));
        assert!(message.contains("*Additional notes:* ring twice"));
    }

    #[test]
    fn test_items_without_add_ons_have_no_extras_line() {
        let mut cart = CartStore::new();
        cart.add(LineItem::new(2, "Cola".to_string(), 2.5, 1, vec![], None));

        let message = compose_order_message(&test_settings(), &cart, &pickup_checkout());

        assert!(!message.contains("Extras:"));
        assert!(!message.contains("Instructions:"));
        assert!(message.contains("Subtotal: $2.50"));
    }
}
