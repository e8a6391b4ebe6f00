use std::cell::RefCell;

///
/// MetricsState
///
/// Process-local counters describing collector activity.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MetricsState {
    /// Relation scans started.
    pub collect_calls: u64,
    /// Scans that ended blocked.
    pub collects_blocked: u64,
    /// Accessor fetches performed.
    pub fetches: u64,
    /// Rows returned across all fetches, including rows later discarded.
    pub rows_fetched: u64,
    /// Rows that ended up in a completed preview.
    pub rows_collected: u64,
}

thread_local! {
    static STATE: RefCell<MetricsState> = RefCell::new(MetricsState::default());
}

/// Read the counters through a shared borrow.
pub fn with_state<R>(f: impl FnOnce(&MetricsState) -> R) -> R {
    STATE.with(|state| f(&state.borrow()))
}

pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut MetricsState) -> R) -> R {
    STATE.with(|state| f(&mut state.borrow_mut()))
}

/// Copy out the current counters.
#[must_use]
pub fn snapshot() -> MetricsState {
    with_state(|state| *state)
}

/// Reset all counters.
pub fn reset() {
    with_state_mut(|state| *state = MetricsState::default());
}
