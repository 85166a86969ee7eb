//! Scenario definition and execution.

use crate::collection::ObjectCollection;
use crate::error::Result;
use crate::factory::{AnyBall, Ball, BallFactory};
use crate::hub::{CounterObserver, NotificationHub, Signal};
use serde::Deserialize;
use std::sync::Arc;

fn default_name() -> String {
    "scenario".to_string()
}

/// An observer to create and subscribe, in declaration order.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ObserverSpec {
    /// Name used in the report
    pub name: String,
    /// Initial (and reset) state
    pub initial: i64,
}

/// A declarative run of the hub, the factory and the collection.
///
/// Every list is optional and defaults to empty.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Scenario {
    /// Scenario name
    #[serde(default = "default_name")]
    pub name: String,
    /// Observers subscribed to the hub, in order
    #[serde(default)]
    pub observers: Vec<ObserverSpec>,
    /// Signal tags fired in order; unknown tags reset
    #[serde(default)]
    pub signals: Vec<String>,
    /// Ball type tags to create
    #[serde(default)]
    pub balls: Vec<String>,
    /// Objects added to the collection
    #[serde(default)]
    pub objects: Vec<String>,
    /// Objects removed from the collection afterwards
    #[serde(default)]
    pub remove_objects: Vec<String>,
}

/// Final state of one observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObserverState {
    /// Observer name
    pub name: String,
    /// Initial state
    pub initial: i64,
    /// State after all signals were fired
    pub state: i64,
}

/// Outcome of [`Scenario::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    /// Scenario name
    pub name: String,
    /// Observer states in subscription order
    pub observers: Vec<ObserverState>,
    /// Total deliveries across all fired signals
    pub deliveries: usize,
    /// `roll()` output for every ball, in order
    pub rolls: Vec<String>,
    /// Variant-specific output (`kick()` or `bounce()`) for every ball
    pub actions: Vec<String>,
    /// Collection contents after removals
    pub objects: Vec<String>,
}

impl ScenarioReport {
    /// Final state of the named observer.
    pub fn state_of(&self, name: &str) -> Option<i64> {
        self.observers
            .iter()
            .find(|o| o.name == name)
            .map(|o| o.state)
    }
}

impl Scenario {
    /// Scenario equivalent to the classic patterns walkthrough: two observers
    /// starting at 1 and 19 receive one increment, a football and a
    /// basketball are created, and Alice is removed from Bob, Alice, Franck.
    pub fn original() -> Self {
        Self {
            name: "original".to_string(),
            observers: vec![
                ObserverSpec {
                    name: "obs1".to_string(),
                    initial: 1,
                },
                ObserverSpec {
                    name: "obs2".to_string(),
                    initial: 19,
                },
            ],
            signals: vec!["INC".to_string()],
            balls: vec!["football".to_string(), "basketball".to_string()],
            objects: vec!["Bob".to_string(), "Alice".to_string(), "Franck".to_string()],
            remove_objects: vec!["Alice".to_string()],
        }
    }

    /// Signals parsed from their tags.
    pub fn parsed_signals(&self) -> Vec<Signal> {
        self.signals.iter().map(|tag| Signal::from_tag(tag)).collect()
    }

    /// Run the scenario with fresh instances.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A ball tag is not supported (`HubError::InvalidArgument`)
    /// - An observer fails to handle a signal (`HubError::DeliveryFailed`)
    pub fn run(&self) -> Result<ScenarioReport> {
        #[cfg(feature = "tracing")]
        tracing::info!(name = %self.name, "running scenario");

        let factory = BallFactory::new();
        let balls = self
            .balls
            .iter()
            .map(|tag| factory.create_ball(tag))
            .collect::<Result<Vec<AnyBall>>>()?;

        let rolls = balls.iter().map(|ball| ball.roll()).collect();
        let actions = balls
            .iter()
            .map(|ball| match ball {
                AnyBall::Football(football) => football.kick(),
                AnyBall::Basketball(basketball) => basketball.bounce(),
            })
            .collect();

        let hub = NotificationHub::new();
        let observers: Vec<(&ObserverSpec, Arc<CounterObserver>)> = self
            .observers
            .iter()
            .map(|spec| (spec, Arc::new(CounterObserver::new(spec.initial))))
            .collect();

        for (_, observer) in &observers {
            hub.subscribe(observer.clone());
        }

        let mut deliveries = 0;
        for signal in self.parsed_signals() {
            deliveries += hub.fire(signal)?;
        }

        let mut collection: ObjectCollection<String> = self.objects.iter().cloned().collect();
        for object in &self.remove_objects {
            collection.remove_object(object);
        }

        let report = ScenarioReport {
            name: self.name.clone(),
            observers: observers
                .iter()
                .map(|(spec, observer)| ObserverState {
                    name: spec.name.clone(),
                    initial: observer.initial(),
                    state: observer.state(),
                })
                .collect(),
            deliveries,
            rolls,
            actions,
            objects: collection.get_objects(),
        };

        #[cfg(feature = "tracing")]
        tracing::info!(
            name = %report.name,
            deliveries = report.deliveries,
            objects = report.objects.len(),
            "scenario finished"
        );

        Ok(report)
    }
}
