//! Performance benchmarks for signal-hub.
//!
//! - Fire latency as the observer count grows
//! - Subscribe/unsubscribe churn cost
//! - Concurrent fires against a shared hub

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use signal_hub::prelude::*;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

fn hub_with_observers(count: usize) -> NotificationHub {
    let hub = NotificationHub::new();
    for initial in 0..count {
        hub.subscribe(Arc::new(CounterObserver::new(initial as i64)));
    }
    hub
}

/// Benchmark a single delivery pass for growing observer counts
fn benchmark_fire(c: &mut Criterion) {
    let mut group = c.benchmark_group("fire");

    for count in [1, 16, 256, 4096] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let hub = hub_with_observers(count);
            b.iter(|| {
                let delivered = hub.fire(black_box(Signal::Increment)).unwrap();
                black_box(delivered);
            });
        });
    }

    group.finish();
}

/// Benchmark subscribe followed by unsubscribe on a populated hub
fn benchmark_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");

    for count in [0, 64, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let hub = hub_with_observers(count);
            let observer = Arc::new(CounterObserver::new(0));
            b.iter(|| {
                hub.subscribe(observer.clone());
                hub.unsubscribe(&observer);
            });
        });
    }

    group.finish();
}

/// Benchmark concurrent fires with varying thread counts
fn benchmark_concurrent_fire(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_fire");

    for num_threads in [1, 2, 4, 8] {
        group.throughput(Throughput::Elements(num_threads as u64 * 1000));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_threads", num_threads)),
            &num_threads,
            |b, &num_threads| {
                let hub = hub_with_observers(16);
                let barrier = Arc::new(Barrier::new(num_threads + 1));

                b.iter_custom(|iters| {
                    let mut handles = vec![];

                    for _ in 0..num_threads {
                        let hub = hub.clone();
                        let barrier = Arc::clone(&barrier);

                        handles.push(thread::spawn(move || {
                            barrier.wait();

                            let start = std::time::Instant::now();
                            for _ in 0..iters {
                                black_box(hub.fire(Signal::Increment).unwrap());
                            }
                            start.elapsed()
                        }));
                    }

                    barrier.wait();

                    let total_duration: Duration =
                        handles.into_iter().map(|h| h.join().unwrap()).sum();

                    total_duration / num_threads as u32
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_fire, benchmark_churn, benchmark_concurrent_fire);

criterion_main!(benches);
