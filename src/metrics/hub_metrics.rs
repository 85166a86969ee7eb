//! Hub metrics tracking using OpenTelemetry.

use opentelemetry::metrics::{Counter, Gauge, Histogram, Meter};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for hub operations.
///
/// Tracks fired signals, delivery outcomes, fire latency and the observer
/// count using OpenTelemetry metrics.
///
/// # Examples
///
/// ```rust,no_run
/// use signal_hub::metrics::HubMetrics;
/// use opentelemetry::global;
///
/// let meter = global::meter("signal-hub");
/// let metrics = HubMetrics::new(meter);
///
/// let timer = metrics.start_fire();
/// // ... deliver to 3 observers, 1 of which fails ...
/// metrics.record_fire(timer, 3, 1);
/// ```
#[derive(Clone)]
pub struct HubMetrics {
    signals_fired: Counter<u64>,
    deliveries: Counter<u64>,
    delivery_failures: Counter<u64>,
    fire_duration: Histogram<f64>,
    active_observers: Gauge<i64>,
    last_fire_age_seconds: Gauge<i64>,
    last_fire: Arc<parking_lot::Mutex<Instant>>,
}

impl HubMetrics {
    /// Create a new metrics collector with the provided meter.
    pub fn new(meter: Meter) -> Self {
        let signals_fired = meter
            .u64_counter("signal_hub.signals.fired")
            .with_description("Total number of fired signals")
            .build();

        let deliveries = meter
            .u64_counter("signal_hub.deliveries")
            .with_description("Number of signal deliveries to observers")
            .build();

        let delivery_failures = meter
            .u64_counter("signal_hub.delivery.failures")
            .with_description("Number of deliveries an observer rejected")
            .build();

        let fire_duration = meter
            .f64_histogram("signal_hub.fire.duration")
            .with_description("Duration of a full delivery pass in seconds")
            .with_unit("s")
            .build();

        let active_observers = meter
            .i64_gauge("signal_hub.observers.active")
            .with_description("Number of subscribed observer entries")
            .build();

        let last_fire_age_seconds = meter
            .i64_gauge("signal_hub.last_fire.age")
            .with_description("Time since the last fired signal in seconds")
            .with_unit("s")
            .build();

        Self {
            signals_fired,
            deliveries,
            delivery_failures,
            fire_duration,
            active_observers,
            last_fire_age_seconds,
            last_fire: Arc::new(parking_lot::Mutex::new(Instant::now())),
        }
    }

    /// Start a fire timer.
    ///
    /// Pass the returned `Instant` to [`HubMetrics::record_fire`]. The idle
    /// gauge is recorded first, so it reports the gap before this fire.
    pub fn start_fire(&self) -> Instant {
        self.signals_fired.add(1, &[]);
        self.update_last_fire_age();
        Instant::now()
    }

    /// Record a completed delivery pass.
    ///
    /// # Arguments
    ///
    /// * `start` - The `Instant` returned from `start_fire()`
    /// * `delivered` - Number of observers visited
    /// * `failed` - Number of observers that returned an error
    pub fn record_fire(&self, start: Instant, delivered: usize, failed: usize) {
        let duration = start.elapsed().as_secs_f64();
        self.deliveries.add(delivered as u64, &[]);
        if failed > 0 {
            self.delivery_failures.add(failed as u64, &[]);
        }
        self.fire_duration.record(duration, &[]);

        *self.last_fire.lock() = Instant::now();
        self.last_fire_age_seconds.record(0, &[]);
    }

    /// Update the number of subscribed observer entries.
    pub fn record_active_observers(&self, count: usize) {
        self.active_observers.record(count as i64, &[]);
    }

    /// Time since the last completed fire, or since creation if none.
    pub fn last_fire_age(&self) -> Duration {
        self.last_fire.lock().elapsed()
    }

    /// Update the time-since-last-fire metric.
    ///
    /// The hub calls this on every fire and every observer list change. Call
    /// it periodically as well to track a hub that sits idle.
    pub fn update_last_fire_age(&self) {
        let age_secs = self.last_fire_age().as_secs() as i64;
        self.last_fire_age_seconds.record(age_secs, &[]);
    }
}
