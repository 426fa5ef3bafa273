//! Aggregate views: dashboard metrics and real-time alerts.
//!
//! Both views draw from fixed base offsets disjoint from the entity
//! generators, so requesting metrics never perturbs entity generation and
//! vice versa. Growth percentages are `variation / baseline * 100`, rounded
//! to one decimal place.

use crate::clock::window_start;
use crate::stream::{round1, round2, DrawStream, ALERTS_OFFSET, METRICS_OFFSET};
use chrono::Duration;
use demodata_core::{AlertKind, AlertSeverity, DashboardMetrics, DemoAlert};

/// Milliseconds in the one-hour span alert timestamps are synthesized within.
const ALERT_AGE_SPAN_MILLIS: f64 = 60.0 * 60.0 * 1000.0;

/// Compute the dashboard summary numbers for the given epoch.
pub fn dashboard_metrics(epoch: u64) -> DashboardMetrics {
    let mut stream = DrawStream::new(epoch, METRICS_OFFSET);

    let total_sales = round2(stream.next_range_f64(250_000.0, 900_000.0));
    let sales_variation = stream.next_range_f64(-60_000.0, 90_000.0);
    let sales_growth = round1(sales_variation / total_sales * 100.0);

    let orders_today = stream.next_range_u32(12, 96);
    let orders_variation = stream.next_range_f64(-20.0, 30.0);
    let orders_growth = round1(orders_variation / f64::from(orders_today) * 100.0);

    let active_customers = stream.next_range_u32(35, 140);
    let customers_variation = stream.next_range_f64(-12.0, 18.0);
    let customers_growth = round1(customers_variation / f64::from(active_customers) * 100.0);

    let inventory_value = round2(stream.next_range_f64(120_000.0, 480_000.0));
    let low_stock_items = stream.next_range_u32(2, 14);

    DashboardMetrics {
        total_sales,
        sales_growth,
        orders_today,
        orders_growth,
        active_customers,
        customers_growth,
        inventory_value,
        low_stock_items,
    }
}

/// Generate the real-time alert feed for the given epoch: between two and
/// five alerts, each one of the four fixed archetypes, timestamped within the
/// hour before the window start.
pub fn real_time_alerts(epoch: u64) -> Vec<DemoAlert> {
    let mut stream = DrawStream::new(epoch, ALERTS_OFFSET);
    let count = stream.next_range_u32(2, 6) as usize;

    (0..count)
        .map(|i| {
            let kind = stream.pick_copy(&AlertKind::ALL);
            let severity = stream.pick_copy(&AlertSeverity::ALL);
            let (title, message) = archetype_text(kind, &mut stream);
            let age_millis = (stream.next_f64() * ALERT_AGE_SPAN_MILLIS) as i64;
            DemoAlert {
                id: format!("DEMO-AL-{:03}", i + 1),
                kind,
                severity,
                title: title.to_string(),
                message,
                timestamp: window_start(epoch) - Duration::milliseconds(age_millis),
            }
        })
        .collect()
}

fn archetype_text(kind: AlertKind, stream: &mut DrawStream) -> (&'static str, String) {
    use demodata_core::vocab::{BRANDS, BUSINESS_NAMES};

    match kind {
        AlertKind::Stock => (
            "Low stock detected",
            format!(
                "{} products are below their reorder level",
                stream.next_range_u32(1, 9)
            ),
        ),
        AlertKind::Order => (
            "New order received",
            format!("Order from {}", stream.pick(BUSINESS_NAMES)),
        ),
        AlertKind::Payment => (
            "Payment overdue",
            format!(
                "{} has an invoice {} days past due",
                stream.pick(BUSINESS_NAMES),
                stream.next_range_u32(1, 45)
            ),
        ),
        AlertKind::Customer => (
            "Customer at risk",
            format!(
                "{} has not ordered {} products recently",
                stream.pick(BUSINESS_NAMES),
                stream.pick(BRANDS)
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customers::generate_customers;

    #[test]
    fn test_metrics_deterministic_within_epoch() {
        assert_eq!(dashboard_metrics(42), dashboard_metrics(42));
    }

    #[test]
    fn test_growth_fields_have_one_decimal() {
        for epoch in 0..50 {
            let metrics = dashboard_metrics(epoch);
            for growth in [
                metrics.sales_growth,
                metrics.orders_growth,
                metrics.customers_growth,
            ] {
                assert_eq!(growth, round1(growth));
            }
        }
    }

    #[test]
    fn test_metrics_independent_of_entity_generation() {
        let epoch = 42;
        let before = dashboard_metrics(epoch);
        let _ = generate_customers(epoch, 100);
        let after = dashboard_metrics(epoch);
        assert_eq!(before, after);
    }

    #[test]
    fn test_alert_count_in_range() {
        for epoch in 0..100 {
            let alerts = real_time_alerts(epoch);
            assert!((2..6).contains(&alerts.len()));
        }
    }

    #[test]
    fn test_alerts_deterministic_within_epoch() {
        assert_eq!(real_time_alerts(42), real_time_alerts(42));
    }

    #[test]
    fn test_alert_timestamps_within_last_hour() {
        let epoch = 56_000_000u64;
        let start = window_start(epoch);
        for alert in real_time_alerts(epoch) {
            assert!(alert.timestamp <= start);
            assert!(start - alert.timestamp <= Duration::hours(1));
        }
    }

    #[test]
    fn test_all_archetypes_reachable() {
        let mut seen = [false; 4];
        for epoch in 0..300 {
            for alert in real_time_alerts(epoch) {
                let idx = AlertKind::ALL
                    .iter()
                    .position(|k| *k == alert.kind)
                    .unwrap();
                seen[idx] = true;
            }
            if seen.iter().all(|s| *s) {
                break;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }
}
