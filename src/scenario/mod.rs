//! Declarative demo scenarios.
//!
//! A [`Scenario`] describes one run of the three patterns: observers with
//! their initial state, the signals to fire, the balls to create and the
//! objects to push through a private collection. Scenarios are loaded from
//! YAML, TOML or JSON with [`ScenarioLoader`] and executed with
//! [`Scenario::run`], which is the only place the hub, factory and
//! collection are wired together.

mod loader;
mod runner;

#[cfg(feature = "validation")]
mod validation;

pub use loader::{ScenarioFormat, ScenarioLoader};
pub use runner::{ObserverSpec, ObserverState, Scenario, ScenarioReport};

#[cfg(feature = "validation")]
pub use validation::Validate;
