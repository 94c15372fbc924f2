//! Per-consumer view state for the AI-backed widgets: the leaderboard card,
//! the logo preview, and the summary dialog each own one of these.

/// `Idle -> Loading -> (Success | Failure)`, re-entering `Loading` only on a
/// fresh explicit trigger. A completion that arrives after the consumer has
/// already left `Loading` is dropped (stale responses never overwrite a
/// newer state).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Success(T),
    Failure,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<T> ViewState<T> {
    /// Explicit trigger (mount, dialog open, button press). Returns false
    /// when a request is already outstanding; the caller must not start
    /// another one.
    pub fn trigger(&mut self) -> bool {
        if matches!(self, ViewState::Loading) {
            return false;
        }
        *self = ViewState::Loading;
        true
    }

    /// Feed an action result in. Absent maps to `Failure`; ignored unless a
    /// request is actually outstanding.
    pub fn resolve(&mut self, result: Option<T>) {
        if !matches!(self, ViewState::Loading) {
            return;
        }
        *self = match result {
            Some(value) => ViewState::Success(value),
            None => ViewState::Failure,
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_success_and_failure() {
        let mut state: ViewState<String> = ViewState::default();
        assert_eq!(state, ViewState::Idle);

        assert!(state.trigger());
        assert!(state.is_loading());
        state.resolve(Some("summary".to_string()));
        assert_eq!(state, ViewState::Success("summary".to_string()));

        assert!(state.trigger());
        state.resolve(None);
        assert_eq!(state, ViewState::Failure);
    }

    #[test]
    fn trigger_is_rejected_while_loading() {
        let mut state: ViewState<()> = ViewState::default();
        assert!(state.trigger());
        assert!(!state.trigger());
        assert!(state.is_loading());
    }

    #[test]
    fn retrigger_after_failure_restarts_the_cycle() {
        let mut state: ViewState<u32> = ViewState::default();
        state.trigger();
        state.resolve(None);
        assert_eq!(state, ViewState::Failure);

        assert!(state.trigger());
        state.resolve(Some(7));
        assert_eq!(state, ViewState::Success(7));
    }

    #[test]
    fn stale_resolutions_are_dropped() {
        let mut state: ViewState<u32> = ViewState::default();
        state.resolve(Some(1));
        assert_eq!(state, ViewState::Idle);

        state.trigger();
        state.resolve(Some(2));
        state.resolve(Some(3));
        assert_eq!(state, ViewState::Success(2));
    }
}
