//! View lifecycle integration tests.
//!
//! Exercises the full poll-fetch-reconcile path with a scripted data
//! source and a paused clock:
//! - cadence: immediate first cycle, then fixed interval, none after
//!   teardown
//! - teardown mid-fetch: in-flight completions are swallowed
//! - overlapping cycles: last completion wins

use fleetmap_feed::{FeedResult, FeedSource};
use fleetmap_view::MapView;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// One scripted fetch cycle: both payloads plus a completion delay.
#[derive(Clone)]
struct CycleScript {
    delay: Duration,
    relay: Value,
    drivers: Value,
}

impl CycleScript {
    fn instant(relay: Value, drivers: Value) -> Self {
        Self {
            delay: Duration::ZERO,
            relay,
            drivers,
        }
    }

    fn delayed(delay_ms: u64, relay: Value, drivers: Value) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            relay,
            drivers,
        }
    }
}

/// Data source that replays a script, one entry per cycle.
///
/// Each cycle calls both fetches exactly once, so per-feed call
/// counters line up with cycle indices. Past the end of the script
/// the last entry repeats.
struct ScriptedSource {
    cycles: Vec<CycleScript>,
    relay_calls: AtomicUsize,
    driver_calls: AtomicUsize,
}

impl ScriptedSource {
    fn new(cycles: Vec<CycleScript>) -> Self {
        assert!(!cycles.is_empty());
        Self {
            cycles,
            relay_calls: AtomicUsize::new(0),
            driver_calls: AtomicUsize::new(0),
        }
    }

    fn cycle(&self, idx: usize) -> &CycleScript {
        self.cycles.get(idx).unwrap_or_else(|| {
            self.cycles.last().expect("script is non-empty")
        })
    }

    fn relay_call_count(&self) -> usize {
        self.relay_calls.load(Ordering::SeqCst)
    }
}

impl FeedSource for ScriptedSource {
    async fn fetch_relay_points(&self) -> FeedResult<Value> {
        let idx = self.relay_calls.fetch_add(1, Ordering::SeqCst);
        let script = self.cycle(idx).clone();
        sleep(script.delay).await;
        Ok(script.relay)
    }

    async fn fetch_drivers(&self) -> FeedResult<Value> {
        let idx = self.driver_calls.fetch_add(1, Ordering::SeqCst);
        let script = self.cycle(idx).clone();
        sleep(script.delay).await;
        Ok(script.drivers)
    }
}

fn driver_payload(id: &str) -> Value {
    json!([{"id": id, "lat": 48.85, "lng": 2.35}])
}

#[tokio::test(start_paused = true)]
async fn test_polls_immediately_then_on_interval_until_deactivated() {
    let source = Arc::new(ScriptedSource::new(vec![CycleScript::instant(
        json!([]),
        driver_payload("d1"),
    )]));

    // MapView owns its source, so count through a thin forwarder.
    struct Forwarder(Arc<ScriptedSource>);
    impl FeedSource for Forwarder {
        async fn fetch_relay_points(&self) -> FeedResult<Value> {
            self.0.fetch_relay_points().await
        }
        async fn fetch_drivers(&self) -> FeedResult<Value> {
            self.0.fetch_drivers().await
        }
    }

    let view = Arc::new(MapView::with_interval(
        Forwarder(Arc::clone(&source)),
        Duration::from_millis(5000),
    ));

    view.activate();

    // t=0 fire
    sleep(Duration::from_millis(1)).await;
    assert_eq!(source.relay_call_count(), 1);
    assert_eq!(view.snapshot().drivers.len(), 1);

    // t=5000
    sleep(Duration::from_millis(5000)).await;
    assert_eq!(source.relay_call_count(), 2);

    view.deactivate();
    sleep(Duration::from_millis(20000)).await;
    assert_eq!(source.relay_call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_deactivate_swallows_in_flight_completion() {
    let view = Arc::new(MapView::with_interval(
        ScriptedSource::new(vec![
            // Immediate mount-time cycle: empty feeds.
            CycleScript::instant(json!([]), json!([])),
            // Slow cycle that will still be in flight at teardown.
            CycleScript::delayed(500, json!([]), driver_payload("late")),
        ]),
        Duration::from_secs(60),
    ));

    view.activate();
    sleep(Duration::from_millis(1)).await;
    assert!(view.snapshot().drivers.is_empty());

    // Start the slow cycle, then tear down while it is in flight.
    let in_flight = {
        let view = Arc::clone(&view);
        tokio::spawn(async move { view.refresh().await })
    };
    sleep(Duration::from_millis(100)).await;

    view.deactivate();
    assert!(!view.is_active());

    // Let the fetch complete; its result must be discarded.
    sleep(Duration::from_millis(1000)).await;
    in_flight.await.unwrap();

    let snapshot = view.snapshot();
    assert!(snapshot.drivers.is_empty());
    assert!(!snapshot.has_error());

    // Second deactivate is a no-op.
    view.deactivate();
}

#[tokio::test(start_paused = true)]
async fn test_out_of_order_completion_last_wins() {
    let view = Arc::new(MapView::with_interval(
        ScriptedSource::new(vec![
            CycleScript::instant(json!([]), json!([])),
            // Issued first, completes last.
            CycleScript::delayed(500, json!([]), driver_payload("slow")),
            // Issued second, completes first.
            CycleScript::delayed(10, json!([]), driver_payload("fast")),
        ]),
        Duration::from_secs(60),
    ));

    view.activate();
    sleep(Duration::from_millis(1)).await;

    let slow = {
        let view = Arc::clone(&view);
        tokio::spawn(async move { view.refresh().await })
    };
    let fast = {
        let view = Arc::clone(&view);
        tokio::spawn(async move { view.refresh().await })
    };

    // Fast cycle has landed, slow one still in flight.
    sleep(Duration::from_millis(100)).await;
    assert_eq!(view.snapshot().drivers[0].id, "fast");

    // Slow cycle lands and overwrites: last completion wins.
    sleep(Duration::from_millis(1000)).await;
    slow.await.unwrap();
    fast.await.unwrap();
    assert_eq!(view.snapshot().drivers[0].id, "slow");

    view.deactivate();
}
