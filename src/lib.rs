//! demodata library: the response envelope and command handlers backing the
//! `demodata` CLI.
//!
//! The engine itself lives in `demodata-engine`; this crate is the thin
//! presentation layer that wraps generator output in the bookkeeping envelope
//! the dashboard expects (`success`, `message`, `lastUpdated`) and serializes
//! it to JSON. The envelope is deliberately not part of the engine contract:
//! `last_updated` reads the wall clock directly and is the only
//! non-deterministic field in the output.
//!
//! # Usage Examples
//!
//! ```bash
//! # Ten customers, compact JSON on stdout
//! demodata customers --count 10
//!
//! # Low-stock items only, pretty-printed into a file
//! demodata inventory --count 25 --status low-stock --pretty --output items.json
//!
//! # Dashboard header numbers
//! demodata metrics
//! ```

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Args;
use demodata_core::StockStatus;
use demodata_engine::DemoEngine;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// JSON envelope attached to every CLI response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub message: String,
    pub last_updated: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    /// A successful response stamped with the current instant.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
            last_updated: Utc::now(),
        }
    }
}

/// Output options shared by every subcommand.
#[derive(Args, Clone, Debug)]
pub struct OutputOpts {
    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Write the JSON to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Serialize a response and write it to stdout or the requested file.
pub fn emit<T: Serialize>(response: &ApiResponse<T>, opts: &OutputOpts) -> anyhow::Result<()> {
    let json = if opts.pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };

    match &opts.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} bytes to {}", json.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Run the customers subcommand.
pub fn run_customers(count: usize, opts: &OutputOpts) -> anyhow::Result<()> {
    let engine = DemoEngine::new();
    let customers = engine.customers(count);
    tracing::info!(
        "Generated {} demo customers (epoch {})",
        customers.len(),
        engine.current_epoch()
    );
    emit(&ApiResponse::ok(customers, "Sample customer data"), opts)
}

/// Run the inventory subcommand.
///
/// The optional status filter is applied after generation; it narrows the
/// output without affecting what the engine produces.
pub fn run_inventory(
    count: usize,
    status: Option<StockStatus>,
    opts: &OutputOpts,
) -> anyhow::Result<()> {
    let engine = DemoEngine::new();
    let mut items = engine.inventory(count);
    if let Some(status) = status {
        items.retain(|item| item.stock_status == status);
        tracing::info!("Filtered to {} items with status {status}", items.len());
    }
    tracing::info!(
        "Generated demo inventory (epoch {})",
        engine.current_epoch()
    );
    emit(&ApiResponse::ok(items, "Sample inventory data"), opts)
}

/// Run the orders subcommand.
pub fn run_orders(count: usize, opts: &OutputOpts) -> anyhow::Result<()> {
    let engine = DemoEngine::new();
    let orders = engine.orders(count);
    tracing::info!(
        "Generated {} demo orders (epoch {})",
        orders.len(),
        engine.current_epoch()
    );
    emit(&ApiResponse::ok(orders, "Sample order data"), opts)
}

/// Run the metrics subcommand.
pub fn run_metrics(opts: &OutputOpts) -> anyhow::Result<()> {
    let engine = DemoEngine::new();
    let metrics = engine.dashboard_metrics();
    tracing::info!(
        "Computed demo dashboard metrics (epoch {})",
        engine.current_epoch()
    );
    emit(&ApiResponse::ok(metrics, "Sample dashboard metrics"), opts)
}

/// Run the alerts subcommand.
pub fn run_alerts(opts: &OutputOpts) -> anyhow::Result<()> {
    let engine = DemoEngine::new();
    let alerts = engine.real_time_alerts();
    tracing::info!(
        "Generated {} demo alerts (epoch {})",
        alerts.len(),
        engine.current_epoch()
    );
    emit(&ApiResponse::ok(alerts, "Sample alert feed"), opts)
}
