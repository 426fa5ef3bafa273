//! Core types for the demodata synthetic business-data engine.
//!
//! This crate defines the record shapes produced by the generator crate
//! (`demodata-engine`) and the fixed vocabularies the generators draw from.
//! Records serialize to camelCase JSON because the consuming dashboard is a
//! JavaScript frontend; the closed enumerations serialize as kebab-case
//! strings.
//!
//! Nothing in this crate reads the clock or produces random values. The types
//! are plain data, and the vocabularies are compiled-in constants rather than
//! externally supplied configuration.

pub mod types;
pub mod vocab;

// Re-exports for convenience
pub use types::{
    AlertKind, AlertSeverity, CustomerType, DashboardMetrics, DemoAlert, OrderLine, OrderPriority,
    OrderStatus, ParseError, PaymentStatus, PaymentTerms, RecommendedAction, SalesChannel,
    StockStatus, SyntheticCustomer, SyntheticInventoryItem, SyntheticOrder, WeeklyTrend,
};
