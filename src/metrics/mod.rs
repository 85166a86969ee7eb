//! Built-in metrics for hub activity.
//!
//! Provides OpenTelemetry metrics tracking:
//! - Signals fired
//! - Deliveries and delivery failures
//! - Fire duration
//! - Active observers
//! - Time since the last fire, refreshed on every fire and observer list
//!   change. Call [`HubMetrics::update_last_fire_age`] on a timer to keep it
//!   current while the hub is idle.
//!
//! # Examples
//!
//! ```rust,no_run
//! use signal_hub::hub::NotificationHub;
//! use signal_hub::metrics::HubMetrics;
//! use opentelemetry::global;
//!
//! let meter = global::meter("my-app");
//! let hub = NotificationHub::new().with_metrics(HubMetrics::new(meter));
//! ```

mod hub_metrics;

pub use hub_metrics::HubMetrics;
