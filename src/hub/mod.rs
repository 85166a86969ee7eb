//! Subject/observer notification hub.
//!
//! A [`NotificationHub`] keeps an ordered list of shared observers and
//! delivers each fired [`Signal`] to all of them synchronously.

mod observer;
mod registry;
mod signal;

pub use observer::{CallbackObserver, CounterObserver, Observer};
pub use registry::NotificationHub;
pub use signal::Signal;
