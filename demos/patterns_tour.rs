//! Example walking through the hub, the ball factory and the collection.
//!
//! This example shows how to:
//! - Subscribe observers and fire signals
//! - Unsubscribe by identity
//! - Build balls from type tags
//! - Read copies out of a private collection
//! - Load and run a scenario file
//!
//! Run with: cargo run --example patterns_tour
//! Set RUST_LOG=signal_hub=debug to see hub events.

use signal_hub::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Observer ===\n");

    let hub = NotificationHub::new();
    let obs1 = Arc::new(CounterObserver::new(1));
    let obs2 = Arc::new(CounterObserver::new(19));

    hub.subscribe(obs1.clone());
    hub.subscribe(obs2.clone());
    hub.subscribe(Arc::new(CallbackObserver::new(|signal| {
        println!("[logger] received {}", signal);
        Ok(())
    })));

    hub.fire(Signal::Increment)?;
    println!("obs1 = {}, obs2 = {}", obs1.state(), obs2.state());

    hub.unsubscribe(&obs1);
    hub.fire(Signal::Decrement)?;
    println!("after unsubscribing obs1: obs1 = {}, obs2 = {}", obs1.state(), obs2.state());

    hub.fire(Signal::from_tag("RESET"))?;
    println!("after reset: obs2 = {}\n", obs2.state());

    println!("=== Factory ===\n");

    let factory = BallFactory::new();
    for tag in ["football", "basketball", "frisbee"] {
        match factory.create_ball(tag) {
            Ok(AnyBall::Football(ball)) => println!("{} {}", ball.roll(), ball.kick()),
            Ok(AnyBall::Basketball(ball)) => println!("{} {}", ball.roll(), ball.bounce()),
            Err(err) => println!("{}", err),
        }
    }

    println!("\n=== Collection ===\n");

    let mut collection = ObjectCollection::new();
    for name in ["Bob", "Alice", "Franck"] {
        collection.add_object(name.to_string());
    }
    println!("{:?}", collection.get_objects());
    collection.remove_object(&"Alice".to_string());
    println!("{:?}", collection.get_objects());

    println!("\n=== Scenario ===\n");

    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scenarios/original.yaml");
    let report = ScenarioLoader::new()
        .with_file(path)
        .with_env_overrides("SIGNAL_HUB", "__")
        .load()?
        .run()?;

    println!("Scenario '{}':", report.name);
    for observer in &report.observers {
        println!("  {} {} -> {}", observer.name, observer.initial, observer.state);
    }
    println!("  rolls:   {:?}", report.rolls);
    println!("  actions: {:?}", report.actions);
    println!("  objects: {:?}", report.objects);

    Ok(())
}
