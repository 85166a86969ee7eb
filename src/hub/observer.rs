//! Observers that react to hub signals.

use super::Signal;
use crate::error::UpdateError;
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// A party interested in hub signals.
///
/// Observers are shared between the hub and their owner, so `update` takes
/// `&self` and implementations keep their state behind interior mutability.
pub trait Observer: Send + Sync {
    /// Apply a delivered signal.
    ///
    /// # Errors
    ///
    /// Returns an `UpdateError` if the signal could not be applied. The hub
    /// keeps delivering to the remaining observers either way.
    fn update(&self, signal: Signal) -> Result<(), UpdateError>;
}

/// Integer-state observer.
///
/// Increments and decrements its current state and falls back to the
/// initial state for every other signal. Arithmetic wraps on overflow.
///
/// # Examples
///
/// ```rust
/// use signal_hub::hub::{CounterObserver, Observer, Signal};
///
/// let observer = CounterObserver::new(1);
/// observer.update(Signal::Increment).unwrap();
/// observer.update(Signal::Increment).unwrap();
/// assert_eq!(observer.state(), 3);
///
/// observer.update(Signal::Reset).unwrap();
/// assert_eq!(observer.state(), 1);
/// ```
pub struct CounterObserver {
    current: AtomicI64,
    initial: i64,
}

impl CounterObserver {
    /// Create an observer whose current and initial state are `initial`.
    pub fn new(initial: i64) -> Self {
        Self {
            current: AtomicI64::new(initial),
            initial,
        }
    }

    /// Current state.
    pub fn state(&self) -> i64 {
        self.current.load(Ordering::SeqCst)
    }

    /// State captured at construction.
    pub fn initial(&self) -> i64 {
        self.initial
    }
}

impl Observer for CounterObserver {
    fn update(&self, signal: Signal) -> Result<(), UpdateError> {
        match signal {
            Signal::Increment => {
                self.current.fetch_add(1, Ordering::SeqCst);
            }
            Signal::Decrement => {
                self.current.fetch_sub(1, Ordering::SeqCst);
            }
            Signal::Reset | Signal::Unknown => {
                self.current.store(self.initial, Ordering::SeqCst);
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CounterObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterObserver")
            .field("current", &self.state())
            .field("initial", &self.initial)
            .finish()
    }
}

/// Observer backed by a closure.
///
/// # Examples
///
/// ```rust
/// use signal_hub::hub::{CallbackObserver, NotificationHub, Signal};
/// use std::sync::Arc;
///
/// let hub = NotificationHub::new();
/// hub.subscribe(Arc::new(CallbackObserver::new(|signal| {
///     println!("received {signal}");
///     Ok(())
/// })));
///
/// hub.fire(Signal::Increment).unwrap();
/// ```
pub struct CallbackObserver<F> {
    callback: F,
}

impl<F> CallbackObserver<F>
where
    F: Fn(Signal) -> Result<(), UpdateError> + Send + Sync,
{
    /// Wrap a callback.
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> Observer for CallbackObserver<F>
where
    F: Fn(Signal) -> Result<(), UpdateError> + Send + Sync,
{
    fn update(&self, signal: Signal) -> Result<(), UpdateError> {
        (self.callback)(signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_increment_and_decrement() {
        let observer = CounterObserver::new(5);
        observer.update(Signal::Increment).unwrap();
        assert_eq!(observer.state(), 6);

        observer.update(Signal::Decrement).unwrap();
        observer.update(Signal::Decrement).unwrap();
        assert_eq!(observer.state(), 4);
        assert_eq!(observer.initial(), 5);
    }

    #[test]
    fn test_reset_restores_initial() {
        let observer = CounterObserver::new(-3);
        for _ in 0..10 {
            observer.update(Signal::Increment).unwrap();
        }
        observer.update(Signal::Reset).unwrap();
        assert_eq!(observer.state(), -3);
    }

    #[test]
    fn test_unknown_behaves_like_reset() {
        let observer = CounterObserver::new(7);
        observer.update(Signal::Decrement).unwrap();
        observer.update(Signal::Unknown).unwrap();
        assert_eq!(observer.state(), 7);
    }

    #[test]
    fn test_inexact_tags_reset() {
        let observer = CounterObserver::new(1);
        observer.update(Signal::from_tag("INC")).unwrap();
        observer.update(Signal::from_tag("inc")).unwrap();
        assert_eq!(observer.state(), 1);

        observer.update(Signal::from_tag("INC")).unwrap();
        observer.update(Signal::from_tag(" INC ")).unwrap();
        assert_eq!(observer.state(), 1);
    }

    #[test]
    fn test_increment_wraps_on_overflow() {
        let observer = CounterObserver::new(i64::MAX);
        observer.update(Signal::Increment).unwrap();
        assert_eq!(observer.state(), i64::MIN);
    }

    #[test]
    fn test_callback_observer_forwards_result() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        let observer = CallbackObserver::new(move |signal| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            match signal {
                Signal::Unknown => Err(UpdateError::new("unsupported")),
                _ => Ok(()),
            }
        });

        assert!(observer.update(Signal::Increment).is_ok());
        assert_eq!(
            observer.update(Signal::Unknown),
            Err(UpdateError::new("unsupported"))
        );
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
