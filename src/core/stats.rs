//! Sales analytics - Aggregates delivered orders into report data.
//!
//! This module provides the figures behind the back office's sales view:
//! order counts and revenue per period (day, ISO week, or month), the top
//! products by revenue, payment method counts, and summary totals. Only
//! delivered orders count as sales. The aggregation helpers are pure
//! functions over fetched rows so they can be exercised without a database;
//! [`generate_sales_report`] is the thin async entry point that fetches and
//! delegates. Reports can be rendered to CSV for download.

use crate::{
    entities::{Order, OrderItem, order, order_item},
    errors::Result,
};
use chrono::Datelike;
use sea_orm::{QueryOrder, prelude::*};
use std::collections::HashMap;
use std::fmt::Write as _;

/// Reporting granularity for per-period sales rows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Period {
    /// One row per calendar day
    Daily,
    /// One row per ISO week
    Weekly,
    /// One row per calendar month
    Monthly,
}

/// Sales figures for one period bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodSales {
    /// Period key, e.g. `"2026-08-06"`, `"2026-W32"`, or `"2026-08"`
    pub period: String,
    /// Number of delivered orders in the period
    pub orders: u32,
    /// Revenue from those orders
    pub revenue: f64,
}

/// Aggregate sales figures for one product.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductSales {
    /// Product name as recorded on the order items
    pub name: String,
    /// Units sold
    pub units: u32,
    /// Revenue from those units
    pub revenue: f64,
}

/// Delivered-order counts per payment method.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymentBreakdown {
    /// Orders paid in cash
    pub cash: u32,
    /// Orders paid by bank transfer
    pub transfer: u32,
}

/// A complete sales report as shown in the back office.
#[derive(Clone, Debug, PartialEq)]
pub struct SalesReport {
    /// Granularity the report was generated at
    pub period: Period,
    /// Per-period rows, oldest first, at most the 10 most recent periods
    pub rows: Vec<PeriodSales>,
    /// Top 5 products by revenue
    pub top_products: Vec<ProductSales>,
    /// Payment method counts
    pub payments: PaymentBreakdown,
    /// Total delivered orders across the reported rows
    pub total_orders: u32,
    /// Total revenue across the reported rows
    pub total_revenue: f64,
    /// Average order value across the reported rows
    pub average_order_value: f64,
}

/// Number of period rows kept in a report (the most recent ones).
const MAX_PERIOD_ROWS: usize = 10;

/// Number of products kept in the top-products list.
const MAX_TOP_PRODUCTS: usize = 5;

/// The period bucket key for a timestamp.
#[must_use]
pub fn period_key(timestamp: DateTimeUtc, period: Period) -> String {
    match period {
        Period::Daily => timestamp.format("%Y-%m-%d").to_string(),
        Period::Weekly => {
            let week = timestamp.iso_week();
            format!("{}-W{:02}", week.year(), week.week())
        }
        Period::Monthly => timestamp.format("%Y-%m").to_string(),
    }
}

/// Groups orders into per-period sales rows, oldest first, keeping only the
/// most recent [`MAX_PERIOD_ROWS`] periods.
#[must_use]
pub fn sales_by_period(orders: &[order::Model], period: Period) -> Vec<PeriodSales> {
    let mut buckets: HashMap<String, (u32, f64)> = HashMap::new();

    for order in orders {
        let key = period_key(order.created_at, period);
        let bucket = buckets.entry(key).or_insert((0, 0.0));
        bucket.0 += 1;
        bucket.1 += order.total_amount;
    }

    let mut rows: Vec<PeriodSales> = buckets
        .into_iter()
        .map(|(period, (orders, revenue))| PeriodSales {
            period,
            orders,
            revenue,
        })
        .collect();
    rows.sort_by(|a, b| a.period.cmp(&b.period));

    if rows.len() > MAX_PERIOD_ROWS {
        rows.drain(..rows.len() - MAX_PERIOD_ROWS);
    }
    rows
}

/// Ranks products by revenue across the given order items, keeping the top
/// [`MAX_TOP_PRODUCTS`].
#[must_use]
pub fn top_products(items: &[order_item::Model]) -> Vec<ProductSales> {
    let mut by_product: HashMap<&str, (u32, f64)> = HashMap::new();

    for item in items {
        let entry = by_product.entry(item.product_name.as_str()).or_insert((0, 0.0));
        entry.0 += u32::try_from(item.quantity).unwrap_or(0);
        entry.1 += item.total_price;
    }

    let mut ranked: Vec<ProductSales> = by_product
        .into_iter()
        .map(|(name, (units, revenue))| ProductSales {
            name: name.to_string(),
            units,
            revenue,
        })
        .collect();
    ranked.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    ranked.truncate(MAX_TOP_PRODUCTS);
    ranked
}

/// Counts orders per payment method.
#[must_use]
pub fn payment_breakdown(orders: &[order::Model]) -> PaymentBreakdown {
    let mut breakdown = PaymentBreakdown::default();

    for order in orders {
        match order.payment_method.as_str() {
            "cash" => breakdown.cash += 1,
            "transfer" => breakdown.transfer += 1,
            _ => {}
        }
    }

    breakdown
}

/// Assembles a report from already-fetched rows.
///
/// Summary totals cover the reported (period-limited) rows, matching what
/// the back office displays next to the period table.
#[must_use]
pub fn build_report(
    orders: &[order::Model],
    items: &[order_item::Model],
    period: Period,
) -> SalesReport {
    let rows = sales_by_period(orders, period);
    let total_orders: u32 = rows.iter().map(|r| r.orders).sum();
    let total_revenue: f64 = rows.iter().map(|r| r.revenue).sum();
    let average_order_value = if total_orders == 0 {
        0.0
    } else {
        total_revenue / f64::from(total_orders)
    };

    SalesReport {
        period,
        rows,
        top_products: top_products(items),
        payments: payment_breakdown(orders),
        total_orders,
        total_revenue,
        average_order_value,
    }
}

/// Generates a sales report over all delivered orders.
pub async fn generate_sales_report(db: &DatabaseConnection, period: Period) -> Result<SalesReport> {
    let delivered = Order::find()
        .filter(order::Column::Status.eq("delivered"))
        .order_by_desc(order::Column::CreatedAt)
        .all(db)
        .await?;

    if delivered.is_empty() {
        return Ok(build_report(&[], &[], period));
    }

    let order_ids: Vec<i64> = delivered.iter().map(|o| o.id).collect();
    let items = OrderItem::find()
        .filter(order_item::Column::OrderId.is_in(order_ids))
        .all(db)
        .await?;

    Ok(build_report(&delivered, &items, period))
}

/// Renders a report as CSV: one row per period followed by a summary block.
#[must_use]
pub fn render_csv(report: &SalesReport) -> String {
    let mut csv = String::from("period,orders,revenue\n");
    for row in &report.rows {
        let _ = writeln!(csv, "{},{},{:.2}", row.period, row.orders, row.revenue);
    }

    csv.push_str("\nsummary\n");
    let _ = writeln!(csv, "total orders,{}", report.total_orders);
    let _ = writeln!(csv, "total revenue,{:.2}", report.total_revenue);
    let _ = writeln!(csv, "average order value,{:.2}", report.average_order_value);

    csv
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use chrono::{TimeZone, Utc};

    fn delivered_order(id: i64, day: u32, total: f64, payment: &str) -> order::Model {
        let created = Utc.with_ymd_and_hms(2026, 8, day, 12, 0, 0).unwrap();
        order::Model {
            id,
            customer_name: "Alice".to_string(),
            customer_phone: "5491100000000".to_string(),
            customer_address: None,
            delivery_method: "pickup".to_string(),
            payment_method: payment.to_string(),
            notes: None,
            status: "delivered".to_string(),
            total_amount: total,
            created_at: created,
            updated_at: created,
        }
    }

    fn item(order_id: i64, name: &str, quantity: i32, total: f64) -> order_item::Model {
        order_item::Model {
            id: order_id * 10,
            order_id,
            product_id: 1,
            product_name: name.to_string(),
            quantity,
            unit_price: total / f64::from(quantity),
            total_price: total,
            special_instructions: None,
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_period_keys() {
        let ts = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        assert_eq!(period_key(ts, Period::Daily), "2026-08-06");
        assert_eq!(period_key(ts, Period::Weekly), "2026-W32");
        assert_eq!(period_key(ts, Period::Monthly), "2026-08");
    }

    #[test]
    fn test_sales_by_period_groups_and_sorts() {
        let orders = vec![
            delivered_order(1, 2, 10.0, "cash"),
            delivered_order(2, 1, 20.0, "cash"),
            delivered_order(3, 2, 5.0, "transfer"),
        ];

        let rows = sales_by_period(&orders, Period::Daily);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].period, "2026-08-01");
        assert_eq!(rows[0].orders, 1);
        assert_eq!(rows[0].revenue, 20.0);
        assert_eq!(rows[1].period, "2026-08-02");
        assert_eq!(rows[1].orders, 2);
        assert_eq!(rows[1].revenue, 15.0);
    }

    #[test]
    fn test_sales_by_period_keeps_most_recent_rows() {
        let orders: Vec<order::Model> = (1..=12)
            .map(|day| delivered_order(i64::from(day), day, 10.0, "cash"))
            .collect();

        let rows = sales_by_period(&orders, Period::Daily);
        assert_eq!(rows.len(), 10);
        // The two oldest days dropped off
        assert_eq!(rows[0].period, "2026-08-03");
        assert_eq!(rows[9].period, "2026-08-12");
    }

    #[test]
    fn test_top_products_ranked_by_revenue() {
        let items = vec![
            item(1, "Burger", 2, 23.0),
            item(2, "Cola", 10, 25.0),
            item(3, "Burger", 1, 11.5),
        ];

        let ranked = top_products(&items);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "Burger");
        assert_eq!(ranked[0].units, 3);
        assert_eq!(ranked[0].revenue, 34.5);
        assert_eq!(ranked[1].name, "Cola");
    }

    #[test]
    fn test_payment_breakdown() {
        let orders = vec![
            delivered_order(1, 1, 10.0, "cash"),
            delivered_order(2, 1, 10.0, "transfer"),
            delivered_order(3, 1, 10.0, "cash"),
        ];

        let breakdown = payment_breakdown(&orders);
        assert_eq!(breakdown.cash, 2);
        assert_eq!(breakdown.transfer, 1);
    }

    #[test]
    fn test_build_report_summary() {
        let orders = vec![
            delivered_order(1, 1, 20.0, "cash"),
            delivered_order(2, 2, 10.0, "transfer"),
        ];
        let items = vec![item(1, "Burger", 2, 20.0), item(2, "Cola", 4, 10.0)];

        let report = build_report(&orders, &items, Period::Daily);
        assert_eq!(report.total_orders, 2);
        assert_eq!(report.total_revenue, 30.0);
        assert_eq!(report.average_order_value, 15.0);
        assert_eq!(report.top_products[0].name, "Burger");
    }

    #[test]
    fn test_empty_report() {
        let report = build_report(&[], &[], Period::Monthly);
        assert!(report.rows.is_empty());
        assert_eq!(report.total_orders, 0);
        assert_eq!(report.average_order_value, 0.0);
    }

    #[test]
    fn test_render_csv() {
        let orders = vec![delivered_order(1, 1, 20.0, "cash")];
        let report = build_report(&orders, &[], Period::Daily);

        let csv = render_csv(&report);
        assert!(csv.starts_with("period,orders,revenue\n"));
        assert!(csv.contains("2026-08-01,1,20.00"));
        assert!(csv.contains("total orders,1"));
        assert!(csv.contains("total revenue,20.00"));
        assert!(csv.contains("average order value,20.00"));
    }

    #[tokio::test]
    async fn test_generate_sales_report_only_counts_delivered() -> crate::errors::Result<()> {
        use crate::{
            core::cart::{CartStore, LineItem},
            core::order::{OrderStatus, place_order, update_order_status},
            test_utils::{pickup_checkout, setup_test_db},
        };

        let db = setup_test_db().await?;

        let mut cart = CartStore::new();
        cart.add(LineItem::new(1, "Burger".to_string(), 10.0, 2, vec![], None));

        let delivered = place_order(&db, &cart, &pickup_checkout()).await?;
        update_order_status(&db, delivered.id, OrderStatus::Delivered).await?;
        // A second order stays pending and must not appear in the report
        place_order(&db, &cart, &pickup_checkout()).await?;

        let report = generate_sales_report(&db, Period::Daily).await?;
        assert_eq!(report.total_orders, 1);
        assert_eq!(report.total_revenue, 20.0);
        assert_eq!(report.payments.cash, 1);
        assert_eq!(report.top_products.len(), 1);
        assert_eq!(report.top_products[0].name, "Burger");
        assert_eq!(report.top_products[0].units, 2);

        Ok(())
    }
}
