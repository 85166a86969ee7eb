//! Property tests for delivery order and observer arithmetic.

use proptest::prelude::*;
use signal_hub::error::UpdateError;
use signal_hub::prelude::*;
use std::sync::{Arc, Mutex};

struct Recorder {
    id: usize,
    log: Arc<Mutex<Vec<usize>>>,
}

impl Observer for Recorder {
    fn update(&self, _signal: Signal) -> std::result::Result<(), UpdateError> {
        self.log.lock().unwrap().push(self.id);
        Ok(())
    }
}

fn signal_strategy() -> impl Strategy<Value = Signal> {
    prop_oneof![
        Just(Signal::Increment),
        Just(Signal::Decrement),
        Just(Signal::Reset),
        Just(Signal::Unknown),
    ]
}

proptest! {
    #[test]
    fn altered_known_tags_reset(
        tag in prop_oneof![Just("inc"), Just(" INC "), Just("Inc"), Just("dec"), Just("DEC "), Just("increment")],
        initial in -100i64..100,
    ) {
        let hub = NotificationHub::new();
        let observer = Arc::new(CounterObserver::new(initial));
        hub.subscribe(observer.clone());

        hub.fire(Signal::Increment).unwrap();
        hub.fire(Signal::from_tag(tag)).unwrap();
        prop_assert_eq!(observer.state(), initial);
    }

    #[test]
    fn delivery_order_matches_subscription_order(ids in prop::collection::vec(0usize..16, 0..32)) {
        let hub = NotificationHub::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        for &id in &ids {
            hub.subscribe(Arc::new(Recorder { id, log: Arc::clone(&log) }));
        }

        let delivered = hub.fire(Signal::Increment).unwrap();
        prop_assert_eq!(delivered, ids.len());
        prop_assert_eq!(log.lock().unwrap().clone(), ids);
    }

    #[test]
    fn counter_tracks_signals_since_last_reset(
        initial in -1_000i64..1_000,
        signals in prop::collection::vec(signal_strategy(), 0..64),
    ) {
        let hub = NotificationHub::new();
        let observer = Arc::new(CounterObserver::new(initial));
        hub.subscribe(observer.clone());

        let mut expected = initial;
        for signal in &signals {
            hub.fire(*signal).unwrap();
            expected = match signal {
                Signal::Increment => expected + 1,
                Signal::Decrement => expected - 1,
                Signal::Reset | Signal::Unknown => initial,
            };
        }

        prop_assert_eq!(observer.state(), expected);
        prop_assert_eq!(observer.initial(), initial);
    }

    #[test]
    fn duplicate_subscriptions_multiply_deliveries(copies in 1usize..6, fires in 0usize..6) {
        let hub = NotificationHub::new();
        let observer = Arc::new(CounterObserver::new(0));
        for _ in 0..copies {
            hub.subscribe(observer.clone());
        }

        for _ in 0..fires {
            hub.fire(Signal::Increment).unwrap();
        }

        prop_assert_eq!(observer.state(), (copies * fires) as i64);

        hub.unsubscribe(&observer);
        prop_assert_eq!(hub.observer_count(), 0);
    }

    #[test]
    fn tag_parsing_never_fails(tag in ".*") {
        let signal = Signal::from_tag(&tag);
        let known = ["INC", "INCREMENT", "DEC", "DECREMENT", "RESET"];
        prop_assert_eq!(signal == Signal::Unknown, !known.contains(&tag.as_str()));
    }
}
