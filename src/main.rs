//! Command-line interface for demodata
//!
//! Emits deterministic synthetic business data as JSON, for use as the
//! fallback ("demo mode") data source of the CRM dashboard.
//!
//! # Usage Examples
//!
//! ```bash
//! # Customers, compact JSON on stdout
//! demodata customers --count 10
//!
//! # Inventory filtered to one stock status
//! demodata inventory --count 25 --status low-stock
//!
//! # Orders, dashboard metrics, alert feed
//! demodata orders --count 15
//! demodata metrics --pretty
//! demodata alerts --output alerts.json
//! ```
//!
//! Within one 30-second window every invocation returns identical data; the
//! dataset evolves between windows.

use clap::{Parser, Subcommand};
use demodata::{run_alerts, run_customers, run_inventory, run_metrics, run_orders, OutputOpts};
use demodata_core::StockStatus;

#[derive(Parser)]
#[command(name = "demodata")]
#[command(about = "Deterministic synthetic business data for CRM dashboard demo mode")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate synthetic customer records
    Customers {
        /// Number of records to generate
        #[arg(long, default_value_t = 10)]
        count: usize,

        #[command(flatten)]
        output: OutputOpts,
    },

    /// Generate synthetic inventory items
    Inventory {
        /// Number of records to generate
        #[arg(long, default_value_t = 10)]
        count: usize,

        /// Only include items with this stock status
        /// (out-of-stock, low-stock, in-stock, overstock)
        #[arg(long)]
        status: Option<StockStatus>,

        #[command(flatten)]
        output: OutputOpts,
    },

    /// Generate synthetic orders, newest first
    Orders {
        /// Number of records to generate
        #[arg(long, default_value_t = 10)]
        count: usize,

        #[command(flatten)]
        output: OutputOpts,
    },

    /// Compute dashboard summary metrics
    Metrics {
        #[command(flatten)]
        output: OutputOpts,
    },

    /// Generate the real-time alert feed
    Alerts {
        #[command(flatten)]
        output: OutputOpts,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Customers { count, output } => run_customers(count, &output),
        Commands::Inventory {
            count,
            status,
            output,
        } => run_inventory(count, status, &output),
        Commands::Orders { count, output } => run_orders(count, &output),
        Commands::Metrics { output } => run_metrics(&output),
        Commands::Alerts { output } => run_alerts(&output),
    }
}
