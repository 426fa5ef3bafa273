//! Order generator.
//!
//! Orders reference parents from small fixed-size pools of customers and
//! inventory items. The pools are produced by the customer and inventory
//! generators themselves, at their own stream offsets, so an order generated
//! in a window references the same customer and product values a caller would
//! get by requesting those entities separately in the same window. Pool sizes
//! are independent of whatever counts callers request elsewhere.

use crate::clock::window_start;
use crate::customers::generate_customers;
use crate::inventory::generate_inventory;
use crate::stream::{round2, DrawStream, ORDERS_OFFSET};
use chrono::Duration;
use demodata_core::{
    OrderLine, OrderPriority, OrderStatus, PaymentStatus, SalesChannel, SyntheticCustomer,
    SyntheticInventoryItem, SyntheticOrder,
};

/// Number of pool customers orders may reference.
const CUSTOMER_POOL: usize = 10;
/// Number of pool products orders may draw line items from.
const PRODUCT_POOL: usize = 15;

/// Milliseconds in the 30-day span order dates are synthesized within.
const ORDER_DATE_SPAN_MILLIS: f64 = 30.0 * 24.0 * 60.0 * 60.0 * 1000.0;

/// Generate `count` orders for the given epoch, sorted by order date
/// descending.
pub fn generate_orders(epoch: u64, count: usize) -> Vec<SyntheticOrder> {
    let customers = generate_customers(epoch, CUSTOMER_POOL);
    let products = generate_inventory(epoch, PRODUCT_POOL);

    let mut stream = DrawStream::new(epoch, ORDERS_OFFSET);
    let mut orders: Vec<SyntheticOrder> = (0..count)
        .map(|i| next_order(&mut stream, epoch, i, &customers, &products))
        .collect();
    orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
    orders
}

fn next_order(
    stream: &mut DrawStream,
    epoch: u64,
    index: usize,
    customers: &[SyntheticCustomer],
    products: &[SyntheticInventoryItem],
) -> SyntheticOrder {
    let customer = &customers[stream.next_index(customers.len())];

    let line_count = stream.next_range_i64_inclusive(1, 5) as usize;
    let items: Vec<OrderLine> = (0..line_count)
        .map(|_| {
            let product = &products[stream.next_index(products.len())];
            let quantity = stream.next_range_i64_inclusive(1, 10) as u32;
            let unit_price = product.sale_price;
            OrderLine {
                product_id: product.id.clone(),
                product_name: product.name.clone(),
                quantity,
                unit_price,
                subtotal: round2(f64::from(quantity) * unit_price),
            }
        })
        .collect();
    let total = round2(items.iter().map(|line| line.subtotal).sum());

    let status = stream.pick_copy(&OrderStatus::ALL);
    let payment_status = stream.pick_copy(&PaymentStatus::ALL);
    let channel = stream.pick_copy(&SalesChannel::ALL);
    let priority = stream.pick_copy(&OrderPriority::ALL);

    // Anchored to the window start so the date is stable for the whole
    // window, never the raw wall clock.
    let age_millis = (stream.next_f64() * ORDER_DATE_SPAN_MILLIS) as i64;
    let order_date = window_start(epoch) - Duration::milliseconds(age_millis);

    SyntheticOrder {
        id: format!("DEMO-ORD-{:04}", index + 1),
        customer_id: customer.id.clone(),
        customer_name: customer.name.clone(),
        items,
        total,
        status,
        payment_status,
        channel,
        priority,
        order_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_count() {
        assert_eq!(generate_orders(42, 6).len(), 6);
        assert!(generate_orders(42, 0).is_empty());
    }

    #[test]
    fn test_deterministic_within_epoch() {
        let a = generate_orders(42, 10);
        let b = generate_orders(42, 10);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sorted_by_date_descending() {
        let orders = generate_orders(31, 20);
        for pair in orders.windows(2) {
            assert!(pair[0].order_date >= pair[1].order_date);
        }
    }

    #[test]
    fn test_line_items_and_total() {
        for order in generate_orders(8, 15) {
            assert!((1..=5).contains(&order.items.len()));
            let mut expected = 0.0;
            for line in &order.items {
                assert!((1..=10).contains(&line.quantity));
                assert_eq!(
                    line.subtotal,
                    round2(f64::from(line.quantity) * line.unit_price)
                );
                expected += line.subtotal;
            }
            assert_eq!(order.total, round2(expected));
        }
    }

    #[test]
    fn test_parents_come_from_shared_pools() {
        let epoch = 42;
        let customers = generate_customers(epoch, CUSTOMER_POOL);
        let products = generate_inventory(epoch, PRODUCT_POOL);

        for order in generate_orders(epoch, 12) {
            let parent = customers
                .iter()
                .find(|c| c.id == order.customer_id)
                .expect("order references a pool customer");
            assert_eq!(parent.name, order.customer_name);
            for line in &order.items {
                let product = products
                    .iter()
                    .find(|p| p.id == line.product_id)
                    .expect("line references a pool product");
                assert_eq!(product.name, line.product_name);
                assert_eq!(product.sale_price, line.unit_price);
            }
        }
    }

    #[test]
    fn test_order_dates_within_last_thirty_days() {
        let epoch = 56_000_000u64;
        let start = window_start(epoch);
        for order in generate_orders(epoch, 25) {
            assert!(order.order_date <= start);
            assert!(start - order.order_date <= Duration::days(30));
        }
    }

    #[test]
    fn test_pool_independent_of_requested_counts() {
        // Requesting different entity counts elsewhere must not change what
        // the orders reference within the same window.
        let epoch = 7;
        let _ = generate_customers(epoch, 3);
        let a = generate_orders(epoch, 5);
        let _ = generate_customers(epoch, 50);
        let b = generate_orders(epoch, 5);
        assert_eq!(a, b);
    }
}
