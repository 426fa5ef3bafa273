//! Customer generator.
//!
//! Produces `count` synthetic customer records for a window epoch. The churn
//! fields are functionally dependent on `days_since_last_order`:
//!
//! - `active` iff fewer than 30 days since the last order
//! - `churn_risk` drawn from `[50, 100)` when more than 45 days have passed,
//!   from `[0, 40)` otherwise
//! - `engagement_score` drawn from `[60, 100)` for active customers, from
//!   `[0, 60)` otherwise
//! - `churn_reason` present only above a churn risk of 60
//! - `recommended_action` tiered on churn risk: above 60 an urgent visit,
//!   above 30 a promotional offer, otherwise regular contact

use crate::stream::{round2, DrawStream, CUSTOMERS_OFFSET};
use demodata_core::vocab::{BUSINESS_NAMES, CHURN_REASONS};
use demodata_core::{CustomerType, PaymentTerms, RecommendedAction, SyntheticCustomer};

/// Generate `count` customers for the given epoch, sorted by name ascending.
///
/// Total over its domain: a count of zero yields an empty list.
pub fn generate_customers(epoch: u64, count: usize) -> Vec<SyntheticCustomer> {
    let mut stream = DrawStream::new(epoch, CUSTOMERS_OFFSET);
    let mut customers: Vec<SyntheticCustomer> =
        (0..count).map(|i| next_customer(&mut stream, i)).collect();
    customers.sort_by(|a, b| a.name.cmp(&b.name));
    customers
}

fn next_customer(stream: &mut DrawStream, index: usize) -> SyntheticCustomer {
    let name = stream.pick(BUSINESS_NAMES).to_string();

    let phone_digits = stream.next_digits(8);
    let phone = format!("+52 55 {} {}", &phone_digits[..4], &phone_digits[4..]);
    let whatsapp_digits = stream.next_digits(8);
    let whatsapp = format!(
        "+52 1 55 {} {}",
        &whatsapp_digits[..4],
        &whatsapp_digits[4..]
    );
    let email = format!("{}{}@example.com", email_slug(&name), stream.next_digits(2));
    // RFC-shaped tax id: four letters, six date digits, three-character key.
    let tax_id = format!(
        "{}{}{}",
        stream.next_upper_letters(4),
        stream.next_digits(6),
        stream.next_upper_letters(3)
    );

    let customer_type = stream.pick_copy(&CustomerType::ALL);
    let payment_terms = stream.pick_copy(&PaymentTerms::ALL);

    let days_since_last_order = stream.next_range_u32(0, 90);
    let total_orders = stream.next_range_u32(1, 48);
    let total_value = round2(stream.next_range_f64(5_000.0, 250_000.0));
    let credit_limit = round2(stream.next_range_f64(10_000.0, 100_000.0));

    let active = days_since_last_order < 30;
    let churn_risk = if days_since_last_order > 45 {
        stream.next_range_f64(50.0, 100.0).floor()
    } else {
        stream.next_range_f64(0.0, 40.0).floor()
    };
    let engagement_score = if active {
        stream.next_range_f64(60.0, 100.0).floor()
    } else {
        stream.next_range_f64(0.0, 60.0).floor()
    };
    let churn_reason = if churn_risk > 60.0 {
        Some(stream.pick(CHURN_REASONS).to_string())
    } else {
        None
    };
    let recommended_action = if churn_risk > 60.0 {
        RecommendedAction::UrgentVisit
    } else if churn_risk > 30.0 {
        RecommendedAction::PromotionalOffer
    } else {
        RecommendedAction::MaintainContact
    };

    SyntheticCustomer {
        id: format!("DEMO-CUST-{:04}", index + 1),
        name,
        phone,
        whatsapp,
        email,
        tax_id,
        customer_type,
        payment_terms,
        days_since_last_order,
        total_orders,
        total_value,
        credit_limit,
        active,
        churn_risk,
        engagement_score,
        churn_reason,
        recommended_action,
    }
}

/// Lowercase, dot-separated slug of a business name for the email local part.
fn email_slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(".")
}
