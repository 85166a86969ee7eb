//! The notification hub: observer registration and synchronous delivery.

use super::{Observer, Signal};
use crate::error::{DeliveryFailure, HubError, Result};
use arc_swap::ArcSwap;
use std::sync::Arc;

#[cfg(feature = "metrics")]
use crate::metrics::HubMetrics;

type ObserverList = Vec<Arc<dyn Observer>>;

/// Registry of observers that delivers signals in subscription order.
///
/// The observer list is held in an `ArcSwap`: `fire` works on a lock-free
/// snapshot while `subscribe`/`unsubscribe` publish a new list with a
/// read-copy-update loop. An observer may therefore subscribe or unsubscribe
/// from inside its own `update`; the change applies from the next `fire`.
///
/// The same observer may be subscribed more than once and then receives
/// every signal once per subscription.
///
/// # Examples
///
/// ```rust
/// use signal_hub::hub::{CounterObserver, NotificationHub, Signal};
/// use std::sync::Arc;
///
/// let hub = NotificationHub::new();
/// let obs1 = Arc::new(CounterObserver::new(1));
/// let obs2 = Arc::new(CounterObserver::new(19));
///
/// hub.subscribe(obs1.clone());
/// hub.subscribe(obs2.clone());
/// hub.fire(Signal::Increment).unwrap();
///
/// assert_eq!(obs1.state(), 2);
/// assert_eq!(obs2.state(), 20);
///
/// hub.unsubscribe(&obs1);
/// assert_eq!(hub.observer_count(), 1);
/// ```
pub struct NotificationHub {
    observers: Arc<ArcSwap<ObserverList>>,
    #[cfg(feature = "metrics")]
    metrics: Option<HubMetrics>,
}

impl NotificationHub {
    /// Create an empty hub.
    pub fn new() -> Self {
        Self {
            observers: Arc::new(ArcSwap::from_pointee(Vec::new())),
            #[cfg(feature = "metrics")]
            metrics: None,
        }
    }

    /// Attach a metrics collector.
    #[cfg(feature = "metrics")]
    pub fn with_metrics(mut self, metrics: HubMetrics) -> Self {
        metrics.record_active_observers(self.observer_count());
        self.metrics = Some(metrics);
        self
    }

    /// Append an observer to the delivery order.
    ///
    /// Never fails. Subscribing an observer that is already present adds a
    /// second entry for it.
    pub fn subscribe(&self, observer: Arc<dyn Observer>) {
        let mut count = 0;
        self.observers.rcu(|current| {
            let mut next = ObserverList::clone(current);
            next.push(Arc::clone(&observer));
            count = next.len();
            next
        });

        self.observers_changed("subscribe", count);
    }

    /// Remove every entry that refers to `observer`.
    ///
    /// Entries are matched by identity (the same `Arc` allocation), not by
    /// value. Unsubscribing an observer that is not present is a no-op.
    pub fn unsubscribe<O>(&self, observer: &Arc<O>)
    where
        O: Observer + ?Sized,
    {
        if !self.is_subscribed(observer) {
            return;
        }

        let target = Arc::as_ptr(observer).cast::<()>();
        let mut remaining = 0;
        self.observers.rcu(|current| {
            let next: ObserverList = current
                .iter()
                .filter(|entry| Arc::as_ptr(*entry).cast::<()>() != target)
                .cloned()
                .collect();
            remaining = next.len();
            next
        });

        self.observers_changed("unsubscribe", remaining);
    }

    /// Deliver `signal` to every observer, in subscription order.
    ///
    /// Delivery is synchronous and always visits every observer present when
    /// the call starts, even if some of them fail. Returns the number of
    /// deliveries made.
    ///
    /// # Errors
    ///
    /// Returns `HubError::DeliveryFailed` after the full pass if any observer
    /// returned an error. The error lists each failing position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use signal_hub::error::{HubError, UpdateError};
    /// use signal_hub::hub::{CallbackObserver, CounterObserver, NotificationHub, Signal};
    /// use std::sync::Arc;
    ///
    /// let hub = NotificationHub::new();
    /// hub.subscribe(Arc::new(CallbackObserver::new(|_| Err(UpdateError::new("offline")))));
    /// let counter = Arc::new(CounterObserver::new(0));
    /// hub.subscribe(counter.clone());
    ///
    /// let err = hub.fire(Signal::Increment).unwrap_err();
    /// assert!(matches!(err, HubError::DeliveryFailed { attempted: 2, .. }));
    ///
    /// // The failure did not stop delivery to the second observer
    /// assert_eq!(counter.state(), 1);
    /// ```
    pub fn fire(&self, signal: Signal) -> Result<usize> {
        #[cfg(feature = "metrics")]
        let timer = self.metrics.as_ref().map(|m| m.start_fire());

        let observers = self.observers.load_full();

        #[cfg(feature = "tracing")]
        tracing::debug!(%signal, observers = observers.len(), "firing signal");

        let mut failures = Vec::new();
        for (position, observer) in observers.iter().enumerate() {
            if let Err(error) = observer.update(signal) {
                #[cfg(feature = "tracing")]
                tracing::warn!(%signal, position, %error, "observer failed to handle signal");

                failures.push(DeliveryFailure { position, error });
            }
        }

        #[cfg(feature = "metrics")]
        if let (Some(metrics), Some(timer)) = (&self.metrics, timer) {
            metrics.record_fire(timer, observers.len(), failures.len());
        }

        if failures.is_empty() {
            Ok(observers.len())
        } else {
            Err(HubError::DeliveryFailed {
                signal,
                attempted: observers.len(),
                failures,
            })
        }
    }

    /// Whether `observer` currently has at least one entry.
    pub fn is_subscribed<O>(&self, observer: &Arc<O>) -> bool
    where
        O: Observer + ?Sized,
    {
        let target = Arc::as_ptr(observer).cast::<()>();
        self.observers
            .load()
            .iter()
            .any(|entry| Arc::as_ptr(entry).cast::<()>() == target)
    }

    /// Number of entries in the delivery order, duplicates included.
    pub fn observer_count(&self) -> usize {
        self.observers.load().len()
    }

    /// Remove all observers.
    pub fn clear(&self) {
        self.observers.store(Arc::new(Vec::new()));
        self.observers_changed("clear", 0);
    }

    fn observers_changed(&self, action: &'static str, count: usize) {
        #[cfg(feature = "tracing")]
        tracing::debug!(action, observers = count, "observer list changed");

        #[cfg(feature = "metrics")]
        if let Some(metrics) = &self.metrics {
            metrics.record_active_observers(count);
            metrics.update_last_fire_age();
        }

        #[cfg(not(any(feature = "tracing", feature = "metrics")))]
        let _ = (action, count);
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones share the same observer list.
impl Clone for NotificationHub {
    fn clone(&self) -> Self {
        Self {
            observers: Arc::clone(&self.observers),
            #[cfg(feature = "metrics")]
            metrics: self.metrics.clone(),
        }
    }
}
