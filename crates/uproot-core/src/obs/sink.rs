//! Metrics sink boundary.
//!
//! Collector logic MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
//!
//! This module is the only allowed bridge between the relation scan
//! and the thread-local counter state.
use crate::{obs::metrics, policy::DeletePolicy};
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn MetricsSink>> = RefCell::new(None);
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent {
    CollectStart {
        entity: &'static str,
    },
    CollectFinish {
        entity: &'static str,
        groups: u64,
        rows: u64,
    },
    RowsFetched {
        entity: &'static str,
        rows: u64,
    },
    BlockedDelete {
        entity: &'static str,
        policy: DeletePolicy,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

///
/// GlobalMetricsSink
/// Default process-local sink that writes into thread-local counter state.
/// Acts as the concrete sink when no scoped override is installed.
///

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::CollectStart { .. } => {
                metrics::with_state_mut(|m| {
                    m.collect_calls = m.collect_calls.saturating_add(1);
                });
            }
            MetricsEvent::CollectFinish { rows, .. } => {
                metrics::with_state_mut(|m| {
                    m.rows_collected = m.rows_collected.saturating_add(rows);
                });
            }
            MetricsEvent::RowsFetched { rows, .. } => {
                metrics::with_state_mut(|m| {
                    m.fetches = m.fetches.saturating_add(1);
                    m.rows_fetched = m.rows_fetched.saturating_add(rows);
                });
            }
            MetricsEvent::BlockedDelete { .. } => {
                metrics::with_state_mut(|m| {
                    m.collects_blocked = m.collects_blocked.saturating_add(1);
                });
            }
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - `ptr` was produced from a valid `&dyn MetricsSink` in
        //   `with_metrics_sink`, which always restores the previous pointer
        //   before returning, including unwind paths via `Guard::drop`.
        // - `record` is synchronous and never stores `ptr` beyond this call.
        // - Only a shared reference is materialized, matching the shared
        //   borrow used to install the override.
        unsafe { (&*ptr).record(event) };
    } else {
        GLOBAL_METRICS_SINK.record(event);
    }
}

/// Run a closure with a temporary metrics sink override.
pub fn with_metrics_sink<T>(sink: &dyn MetricsSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn MetricsSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - `sink_ptr` is installed only for this dynamic scope.
    // - `Guard` restores the previous slot on all exits, including panic.
    // - `record` only dereferences synchronously and never persists the
    //   pointer, so it cannot outlive the borrowed sink.
    let sink_ptr =
        unsafe { std::mem::transmute::<&dyn MetricsSink, *const dyn MetricsSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| {
        let mut slot = cell.borrow_mut();
        slot.replace(sink_ptr)
    });
    let _guard = Guard(prev);

    f()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSink<'a> {
        calls: &'a AtomicUsize,
    }

    impl MetricsSink for CountingSink<'_> {
        fn record(&self, _: MetricsEvent) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn with_metrics_sink_routes_and_restores_nested_overrides() {
        SINK_OVERRIDE.with(|cell| {
            *cell.borrow_mut() = None;
        });
        metrics::reset();

        let outer_calls = AtomicUsize::new(0);
        let inner_calls = AtomicUsize::new(0);
        let outer = CountingSink {
            calls: &outer_calls,
        };
        let inner = CountingSink {
            calls: &inner_calls,
        };

        // No override installed yet; the event lands in the global counters.
        record(MetricsEvent::CollectStart { entity: "invoice" });
        assert_eq!(outer_calls.load(Ordering::SeqCst), 0);
        assert_eq!(metrics::snapshot().collect_calls, 1);

        with_metrics_sink(&outer, || {
            record(MetricsEvent::CollectStart { entity: "invoice" });
            assert_eq!(outer_calls.load(Ordering::SeqCst), 1);
            assert_eq!(inner_calls.load(Ordering::SeqCst), 0);

            with_metrics_sink(&inner, || {
                record(MetricsEvent::RowsFetched {
                    entity: "invoice_line",
                    rows: 3,
                });
            });

            // Inner override was restored to outer override.
            record(MetricsEvent::BlockedDelete {
                entity: "invoice",
                policy: DeletePolicy::Protect,
            });
        });

        assert_eq!(outer_calls.load(Ordering::SeqCst), 2);
        assert_eq!(inner_calls.load(Ordering::SeqCst), 1);

        // Overridden events never reached the global counters.
        let state = metrics::snapshot();
        assert_eq!(state.collect_calls, 1);
        assert_eq!(state.fetches, 0);
        assert_eq!(state.collects_blocked, 0);

        // Outer override was restored to previous (none).
        SINK_OVERRIDE.with(|cell| {
            assert!(cell.borrow().is_none());
        });
    }

    #[test]
    fn with_metrics_sink_restores_override_on_panic() {
        SINK_OVERRIDE.with(|cell| {
            *cell.borrow_mut() = None;
        });

        let calls = AtomicUsize::new(0);
        let sink = CountingSink { calls: &calls };

        let panicked = catch_unwind(AssertUnwindSafe(|| {
            with_metrics_sink(&sink, || {
                record(MetricsEvent::CollectStart { entity: "invoice" });
                panic!("intentional panic for guard test");
            });
        }))
        .is_err();
        assert!(panicked);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // Guard restored TLS slot after unwind.
        SINK_OVERRIDE.with(|cell| {
            assert!(cell.borrow().is_none());
        });
    }

    #[test]
    fn global_sink_accumulates_counters() {
        SINK_OVERRIDE.with(|cell| {
            *cell.borrow_mut() = None;
        });
        metrics::reset();

        record(MetricsEvent::CollectStart { entity: "invoice" });
        record(MetricsEvent::RowsFetched {
            entity: "invoice_line",
            rows: 3,
        });
        record(MetricsEvent::RowsFetched {
            entity: "payment",
            rows: 0,
        });
        record(MetricsEvent::CollectFinish {
            entity: "invoice",
            groups: 1,
            rows: 3,
        });

        let state = metrics::snapshot();
        assert_eq!(state.collect_calls, 1);
        assert_eq!(state.fetches, 2);
        assert_eq!(state.rows_fetched, 3);
        assert_eq!(state.rows_collected, 3);
        assert_eq!(state.collects_blocked, 0);
    }
}
