//! Record types produced by the demodata engine.
//!
//! Every record is created fresh on each generator invocation; nothing here
//! is ever persisted or mutated. The types derive `PartialEq` so callers can
//! assert that two generations within the same time window are deep-equal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error type for parsing enumeration values from strings.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The string does not name a known stock status.
    #[error("unknown stock status: {0}")]
    UnknownStockStatus(String),
}

/// A synthesized customer record.
///
/// The contact fields are drawn from the random stream and are not validated
/// for real-world correctness. `churn_risk` and `recommended_action` are
/// functionally dependent on `days_since_last_order`; see the generator for
/// the exact thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticCustomer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub whatsapp: String,
    pub email: String,
    pub tax_id: String,
    pub customer_type: CustomerType,
    pub payment_terms: PaymentTerms,
    pub days_since_last_order: u32,
    pub total_orders: u32,
    pub total_value: f64,
    pub credit_limit: f64,
    pub active: bool,
    pub churn_risk: f64,
    pub engagement_score: f64,
    /// Present only when `churn_risk` exceeds 60.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub churn_reason: Option<String>,
    pub recommended_action: RecommendedAction,
}

/// A synthesized inventory item.
///
/// `current_quantity` is always `max(0, base_quantity + daily_movement)`,
/// and `stock_status` is a pure function of the quantity fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticInventoryItem {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub location: String,
    pub base_price: f64,
    /// Soft invariant: at least `base_price`.
    pub sale_price: f64,
    pub base_quantity: u32,
    pub daily_movement: i32,
    pub current_quantity: u32,
    pub reorder_level: u32,
    pub stock_status: StockStatus,
    pub weekly_trend: WeeklyTrend,
}

/// One line of a synthesized order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub subtotal: f64,
}

/// A synthesized order referencing a pool customer and 1-5 pool products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticOrder {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub items: Vec<OrderLine>,
    pub total: f64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub channel: SalesChannel,
    pub priority: OrderPriority,
    pub order_date: DateTime<Utc>,
}

/// Summary numbers for the dashboard header cards.
///
/// Growth fields are percentages rounded to one decimal place, computed as
/// `variation / baseline * 100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_sales: f64,
    pub sales_growth: f64,
    pub orders_today: u32,
    pub orders_growth: f64,
    pub active_customers: u32,
    pub customers_growth: f64,
    pub inventory_value: f64,
    pub low_stock_items: u32,
}

/// A real-time alert entry for the dashboard feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoAlert {
    pub id: String,
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Business classification of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CustomerType {
    Retail,
    Wholesale,
    Distributor,
    Online,
}

impl CustomerType {
    pub const ALL: [CustomerType; 4] = [
        CustomerType::Retail,
        CustomerType::Wholesale,
        CustomerType::Distributor,
        CustomerType::Online,
    ];
}

/// Payment terms granted to a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentTerms {
    Cash,
    Net15,
    Net30,
    Net60,
}

impl PaymentTerms {
    pub const ALL: [PaymentTerms; 4] = [
        PaymentTerms::Cash,
        PaymentTerms::Net15,
        PaymentTerms::Net30,
        PaymentTerms::Net60,
    ];
}

/// Next-step recommendation derived from the churn risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendedAction {
    /// Churn risk above 60: schedule an urgent visit.
    UrgentVisit,
    /// Churn risk in (30, 60]: send a promotional offer.
    PromotionalOffer,
    /// Otherwise: keep regular contact.
    MaintainContact,
}

/// Four-way classification of inventory health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
    Overstock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out-of-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::InStock => "in-stock",
            StockStatus::Overstock => "overstock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "out-of-stock" => Ok(StockStatus::OutOfStock),
            "low-stock" => Ok(StockStatus::LowStock),
            "in-stock" => Ok(StockStatus::InStock),
            "overstock" => Ok(StockStatus::Overstock),
            other => Err(ParseError::UnknownStockStatus(other.to_string())),
        }
    }
}

/// Direction of an item's weekly stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeeklyTrend {
    Up,
    Down,
    Stable,
}

/// Fulfillment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];
}

/// Payment state of an order, independent of fulfillment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    PartiallyPaid,
    Overdue,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Pending,
        PaymentStatus::Paid,
        PaymentStatus::PartiallyPaid,
        PaymentStatus::Overdue,
    ];
}

/// Channel through which an order was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SalesChannel {
    FieldSales,
    Phone,
    Whatsapp,
    Web,
}

impl SalesChannel {
    pub const ALL: [SalesChannel; 4] = [
        SalesChannel::FieldSales,
        SalesChannel::Phone,
        SalesChannel::Whatsapp,
        SalesChannel::Web,
    ];
}

/// Handling priority of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderPriority {
    Low,
    Normal,
    High,
    Urgent,
}

impl OrderPriority {
    pub const ALL: [OrderPriority; 4] = [
        OrderPriority::Low,
        OrderPriority::Normal,
        OrderPriority::High,
        OrderPriority::Urgent,
    ];
}

/// The four fixed alert archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertKind {
    Stock,
    Order,
    Payment,
    Customer,
}

impl AlertKind {
    pub const ALL: [AlertKind; 4] = [
        AlertKind::Stock,
        AlertKind::Order,
        AlertKind::Payment,
        AlertKind::Customer,
    ];
}

/// Severity of a dashboard alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

impl AlertSeverity {
    pub const ALL: [AlertSeverity; 3] = [
        AlertSeverity::Info,
        AlertSeverity::Warning,
        AlertSeverity::Critical,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_round_trip() {
        for status in [
            StockStatus::OutOfStock,
            StockStatus::LowStock,
            StockStatus::InStock,
            StockStatus::Overstock,
        ] {
            let parsed: StockStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_stock_status_unknown() {
        let result = StockStatus::from_str("backordered");
        assert!(matches!(result, Err(ParseError::UnknownStockStatus(_))));
    }

    #[test]
    fn test_enums_serialize_kebab_case() {
        assert_eq!(
            serde_json::to_string(&RecommendedAction::UrgentVisit).unwrap(),
            "\"urgent-visit\""
        );
        assert_eq!(
            serde_json::to_string(&StockStatus::OutOfStock).unwrap(),
            "\"out-of-stock\""
        );
        assert_eq!(
            serde_json::to_string(&SalesChannel::FieldSales).unwrap(),
            "\"field-sales\""
        );
    }

    #[test]
    fn test_customer_serializes_camel_case() {
        let customer = SyntheticCustomer {
            id: "DEMO-CUST-0001".to_string(),
            name: "Abarrotes El Centro".to_string(),
            phone: "+52 55 1234 5678".to_string(),
            whatsapp: "+52 1 55 1234 5678".to_string(),
            email: "abarrotes.el.centro@example.com".to_string(),
            tax_id: "AECX123456ABC".to_string(),
            customer_type: CustomerType::Retail,
            payment_terms: PaymentTerms::Net30,
            days_since_last_order: 12,
            total_orders: 24,
            total_value: 84210.50,
            credit_limit: 50000.0,
            active: true,
            churn_risk: 22.0,
            engagement_score: 81.0,
            churn_reason: None,
            recommended_action: RecommendedAction::MaintainContact,
        };

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["daysSinceLastOrder"], 12);
        assert_eq!(json["recommendedAction"], "maintain-contact");
        // churn_reason is absent, not null
        assert!(json.get("churnReason").is_none());
    }
}
