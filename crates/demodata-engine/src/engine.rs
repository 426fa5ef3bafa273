//! Stateless engine facade.
//!
//! `DemoEngine` replaces what the original dashboard kept as a module-level
//! singleton: it owns nothing but a clock. Every operation reads the current
//! epoch once and delegates to the pure generator functions, so concurrent
//! callers can share one engine (or build their own) freely.

use crate::clock::{Clock, SystemClock};
use crate::customers::generate_customers;
use crate::dashboard::{dashboard_metrics, real_time_alerts};
use crate::inventory::generate_inventory;
use crate::orders::generate_orders;
use demodata_core::{
    DashboardMetrics, DemoAlert, SyntheticCustomer, SyntheticInventoryItem, SyntheticOrder,
};

/// Synthetic business-data engine bound to a clock.
#[derive(Debug, Clone)]
pub struct DemoEngine<C: Clock = SystemClock> {
    clock: C,
}

impl DemoEngine<SystemClock> {
    /// Engine on the system wall clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for DemoEngine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> DemoEngine<C> {
    /// Engine on an injected clock (fixed clocks pin the epoch for tests).
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// The epoch the next operation will observe.
    pub fn current_epoch(&self) -> u64 {
        self.clock.epoch()
    }

    /// Generate `count` customers, sorted by name.
    pub fn customers(&self, count: usize) -> Vec<SyntheticCustomer> {
        let epoch = self.clock.epoch();
        tracing::debug!(epoch, count, "generating synthetic customers");
        generate_customers(epoch, count)
    }

    /// Generate `count` inventory items, sorted by product name.
    pub fn inventory(&self, count: usize) -> Vec<SyntheticInventoryItem> {
        let epoch = self.clock.epoch();
        tracing::debug!(epoch, count, "generating synthetic inventory");
        generate_inventory(epoch, count)
    }

    /// Generate `count` orders, newest first.
    pub fn orders(&self, count: usize) -> Vec<SyntheticOrder> {
        let epoch = self.clock.epoch();
        tracing::debug!(epoch, count, "generating synthetic orders");
        generate_orders(epoch, count)
    }

    /// Dashboard summary numbers for the current window.
    pub fn dashboard_metrics(&self) -> DashboardMetrics {
        let epoch = self.clock.epoch();
        tracing::debug!(epoch, "computing dashboard metrics");
        dashboard_metrics(epoch)
    }

    /// Real-time alert feed for the current window.
    pub fn real_time_alerts(&self) -> Vec<DemoAlert> {
        let epoch = self.clock.epoch();
        tracing::debug!(epoch, "generating real-time alerts");
        real_time_alerts(epoch)
    }
}
