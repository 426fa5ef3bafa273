//! Deterministic synthetic business-data engine.
//!
//! This crate produces internally-consistent, time-evolving fake records for
//! the demodata dashboard: customers, inventory items, orders, dashboard
//! metrics, and real-time alerts. There is no backing database; "persistence"
//! is simulated by quantizing wall-clock time into 30-second windows and
//! deriving every value from the window's epoch through a seeded draw stream.
//!
//! # Architecture
//!
//! ```text
//! Clock (wall clock or fixed)
//!        │  now_millis()
//!        ▼
//!   epoch_for()  ──►  epoch (30s window)
//!        │
//!        ▼
//! ┌────────────────┐
//! │   DrawStream   │  seed = epoch + base_offset + counter
//! │  (per call)    │  draw(seed) -> f64 in [0,1)
//! └───────┬────────┘
//!         │
//!         ▼
//!  customers / inventory / orders / dashboard
//! ```
//!
//! Two calls to any generator within the same window return structurally
//! identical output; calls in later windows return a plausibly-evolved
//! dataset. Every call is a pure function of (epoch, requested count), so
//! concurrent callers need no synchronization.
//!
//! # Example
//!
//! ```rust
//! use demodata_engine::{DemoEngine, FixedClock};
//!
//! let engine = DemoEngine::with_clock(FixedClock::at_epoch(42));
//! let a = engine.customers(5);
//! let b = engine.customers(5);
//! assert_eq!(a, b);
//! ```

pub mod clock;
pub mod customers;
pub mod dashboard;
pub mod engine;
pub mod inventory;
pub mod orders;
pub mod stream;

// Re-exports for convenience
pub use clock::{epoch_for, Clock, FixedClock, SystemClock, WINDOW_MILLIS};
pub use engine::DemoEngine;
pub use stream::{draw, DrawStream};
