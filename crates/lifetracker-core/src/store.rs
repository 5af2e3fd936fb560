use crate::cell::StateCell;
use crate::event::{LifecycleEvent, Stage};

/// Label shown before the first lifecycle notification arrives.
pub const UNKNOWN_STATE: &str = "Unknown";

/// The four observable values backing the whole screen.
///
/// All mutation goes through the four operations below; the presentation
/// layer only reads. Lives exactly as long as the screen does — no
/// persistence.
pub struct TrackerState {
    log: StateCell<Vec<LifecycleEvent>>,
    current: StateCell<String>,
    banner_enabled: StateCell<bool>,
    pending: StateCell<Option<LifecycleEvent>>,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackerState {
    pub fn new() -> Self {
        Self {
            log: StateCell::new(Vec::new()),
            current: StateCell::new(UNKNOWN_STATE.to_string()),
            banner_enabled: StateCell::new(true),
            pending: StateCell::new(None),
        }
    }

    /// Record a lifecycle notification: append to the log, update the
    /// current-state label, and arm the pending slot.
    ///
    /// Appends in arrival order, duplicates allowed. A pending event that has
    /// not been acknowledged yet is overwritten (last write wins); the banner
    /// for it is simply lost.
    pub fn append(&mut self, stage: Stage) {
        self.record(LifecycleEvent::now(stage));
    }

    /// [`append`](Self::append) with a caller-supplied event, used by tests
    /// to pin timestamps.
    pub fn record(&mut self, event: LifecycleEvent) {
        self.current.set(event.name.clone());
        self.pending.set(Some(event.clone()));
        self.log.update(|log| log.push(event));
    }

    /// Empty the event log. The current-state label, the banner flag, and the
    /// pending slot are untouched.
    pub fn clear_log(&mut self) {
        self.log.update(|log| log.clear());
    }

    /// Flip the banner-enabled flag.
    pub fn toggle_banner(&mut self) {
        let flipped = !self.banner_enabled.get();
        self.banner_enabled.set(flipped);
    }

    /// Empty the pending slot. Idempotent: a second consecutive call neither
    /// changes the value nor bumps the slot's version.
    pub fn acknowledge_pending(&mut self) {
        if self.pending.get().is_some() {
            self.pending.set(None);
        }
    }

    pub fn events(&self) -> &[LifecycleEvent] {
        self.log.get()
    }

    pub fn log_version(&self) -> u64 {
        self.log.version()
    }

    pub fn current_state(&self) -> &str {
        self.current.get()
    }

    /// Stage of the most recent event, if any. Drives the status-card dot.
    pub fn current_stage(&self) -> Option<Stage> {
        self.log.get().last().map(|ev| ev.stage)
    }

    pub fn banner_enabled(&self) -> bool {
        *self.banner_enabled.get()
    }

    pub fn pending(&self) -> Option<&LifecycleEvent> {
        self.pending.get().as_ref()
    }

    pub fn pending_version(&self) -> u64 {
        self.pending.version()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_with_unknown_label() {
        let state = TrackerState::new();
        assert!(state.events().is_empty());
        assert_eq!(state.current_state(), UNKNOWN_STATE);
        assert!(state.banner_enabled());
        assert!(state.pending().is_none());
        assert_eq!(state.current_stage(), None);
    }

    #[test]
    fn log_length_tracks_delivery_count() {
        let mut state = TrackerState::new();
        for (i, stage) in Stage::ALL.iter().cycle().take(9).enumerate() {
            state.append(*stage);
            assert_eq!(state.events().len(), i + 1);
        }
    }

    #[test]
    fn log_order_equals_delivery_order() {
        let mut state = TrackerState::new();
        state.append(Stage::Created);
        state.append(Stage::Started);
        state.append(Stage::Resumed);
        let names: Vec<&str> = state.events().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["on_create", "on_start", "on_resume"]);
        assert_eq!(state.current_state(), "on_resume");
    }

    #[test]
    fn duplicates_are_kept() {
        let mut state = TrackerState::new();
        state.append(Stage::Paused);
        state.append(Stage::Paused);
        state.append(Stage::Paused);
        assert_eq!(state.events().len(), 3);
        assert_eq!(state.current_state(), "on_pause");
    }

    #[test]
    fn append_updates_label_and_pending() {
        let mut state = TrackerState::new();
        state.append(Stage::Destroyed);
        assert_eq!(state.current_state(), "on_destroy");
        assert_eq!(state.pending().unwrap().stage, Stage::Destroyed);
    }

    #[test]
    fn clear_log_empties_log_only() {
        let mut state = TrackerState::new();
        for stage in Stage::ALL.iter().take(5) {
            state.append(*stage);
        }
        let label_before = state.current_state().to_string();
        state.clear_log();
        assert!(state.events().is_empty());
        assert_eq!(state.current_state(), label_before);
        assert!(state.banner_enabled());
        assert!(state.pending().is_some());
    }

    #[test]
    fn clear_on_empty_log_is_fine() {
        let mut state = TrackerState::new();
        state.clear_log();
        assert!(state.events().is_empty());
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut state = TrackerState::new();
        state.toggle_banner();
        assert!(!state.banner_enabled());
        state.toggle_banner();
        assert!(state.banner_enabled());
    }

    #[test]
    fn acknowledge_clears_pending_and_is_idempotent() {
        let mut state = TrackerState::new();
        state.append(Stage::Started);
        state.acknowledge_pending();
        assert!(state.pending().is_none());
        let version = state.pending_version();
        state.acknowledge_pending();
        assert!(state.pending().is_none());
        assert_eq!(state.pending_version(), version, "second call is a no-op");
    }

    #[test]
    fn rapid_appends_overwrite_pending() {
        // Last write wins; the earlier pending event is lost without a banner.
        let mut state = TrackerState::new();
        state.append(Stage::Paused);
        state.append(Stage::Stopped);
        assert_eq!(state.pending().unwrap().stage, Stage::Stopped);
        assert_eq!(state.events().len(), 2);
    }

    #[test]
    fn record_keeps_supplied_timestamp() {
        let mut state = TrackerState::new();
        state.record(LifecycleEvent::with_timestamp(
            Stage::Created,
            "09:15:00.123".into(),
        ));
        assert_eq!(state.events()[0].timestamp, "09:15:00.123");
    }

    #[test]
    fn versions_bump_on_mutation() {
        let mut state = TrackerState::new();
        let log_v = state.log_version();
        let pending_v = state.pending_version();
        state.append(Stage::Created);
        assert!(state.log_version() > log_v);
        assert!(state.pending_version() > pending_v);
    }
}
