//! # signal-hub
//!
//! A notification hub with lock-free subscriber snapshots, plus two small
//! companion patterns: a validated variant factory and a copy-on-read
//! private collection.
//!
//! ## Overview
//!
//! `signal-hub` provides:
//! - [`hub::NotificationHub`]: ordered observer registry with synchronous,
//!   failure-tolerant delivery backed by `arc-swap`
//! - [`factory::BallFactory`]: builds one of a closed set of variants from a
//!   type tag and rejects unknown tags
//! - [`collection::ObjectCollection`]: owned sequence exposed only through
//!   add, remove and deep-copy reads
//! - [`scenario`]: declarative runs loaded from YAML, TOML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use signal_hub::prelude::*;
//! use std::sync::Arc;
//!
//! # fn example() -> signal_hub::error::Result<()> {
//! let hub = NotificationHub::new();
//! let obs1 = Arc::new(CounterObserver::new(1));
//! let obs2 = Arc::new(CounterObserver::new(19));
//!
//! hub.subscribe(obs1.clone());
//! hub.subscribe(obs2.clone());
//! hub.fire(Signal::Increment)?;
//!
//! assert_eq!(obs1.state(), 2);
//! assert_eq!(obs2.state(), 20);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Feature Flags
//!
//! - `validation` (default): validate scenarios on load
//! - `tracing` (default): emit `tracing` events from the hub, factory and
//!   scenario runner
//! - `metrics`: OpenTelemetry instruments for hub activity

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod collection;
pub mod error;
pub mod factory;
pub mod hub;
pub mod scenario;

#[cfg(feature = "metrics")]
pub mod metrics;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::collection::ObjectCollection;
    pub use crate::error::{HubError, Result, UpdateError};
    pub use crate::factory::{AnyBall, Ball, BallFactory, BallKind};
    pub use crate::hub::{CallbackObserver, CounterObserver, NotificationHub, Observer, Signal};
    pub use crate::scenario::{Scenario, ScenarioLoader};
}
