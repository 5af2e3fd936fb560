use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{widgets::ListState, Frame};

use lifetracker_core::{
    banner::Banner,
    bus::{Event, EventBus},
    event::Stage,
    observer::deliver,
    store::TrackerState,
};
use lifetracker_ui::{
    banner::render_banner,
    layout::screen_layout,
    list::render_event_log,
    shell::{render_shell, ShellView},
};

/// Everything the running screen owns: the observable store, the app event
/// bus, the banner, and per-frame view state.
pub struct App {
    pub store: TrackerState,
    pub bus: EventBus,
    banner: Banner,
    list_state: ListState,
    seen_pending: u64,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let store = TrackerState::new();
        let seen_pending = store.pending_version();
        Self {
            store,
            bus: EventBus::new(),
            banner: Banner::new(),
            list_state: ListState::default(),
            seen_pending,
            should_quit: false,
        }
    }

    /// Queue the launch sequence the host delivers before the first frame.
    pub fn publish_launch_sequence(&mut self) {
        for stage in [Stage::Created, Stage::Started, Stage::Resumed] {
            self.bus.publish(Event::Lifecycle(stage));
        }
    }

    /// Queue the teardown sequence delivered after quit is requested.
    pub fn publish_teardown_sequence(&mut self) {
        for stage in [Stage::Paused, Stage::Stopped, Stage::Destroyed] {
            self.bus.publish(Event::Lifecycle(stage));
        }
    }

    /// Drain the bus and apply every pending event in arrival order.
    pub fn drain_and_apply(&mut self) {
        for event in self.bus.drain() {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: Event) {
        match event {
            Event::Lifecycle(stage) => deliver(&mut self.store, stage),
            Event::FocusGained => deliver(&mut self.store, Stage::Resumed),
            Event::FocusLost => deliver(&mut self.store, Stage::Paused),
            Event::Key(key) => self.handle_key(key),
            Event::Tick { now } => {
                if self.banner.tick(now) {
                    self.store.acknowledge_pending();
                }
            }
            // The terminal is redrawn from scratch every frame anyway.
            Event::Resize { .. } => {}
            Event::Quit => self.should_quit = true,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('b') => {
                self.store.toggle_banner();
                tracing::info!(enabled = self.store.banner_enabled(), "banner toggled");
            }
            KeyCode::Char('c') => {
                self.store.clear_log();
                tracing::info!("event log cleared");
            }
            KeyCode::Esc | KeyCode::Enter => {
                if self.banner.dismiss() {
                    self.store.acknowledge_pending();
                }
            }
            _ => {}
        }
    }

    /// React to pending-slot transitions since the last frame: show the
    /// banner when the flag is on, otherwise acknowledge straight away.
    ///
    /// A second append before acknowledgment replaces both the slot and the
    /// banner; the earlier banner is lost by design.
    pub fn sync_banner(&mut self, now: Instant) {
        if self.store.pending_version() != self.seen_pending {
            self.seen_pending = self.store.pending_version();
            if let Some(event) = self.store.pending().cloned() {
                if self.store.banner_enabled() {
                    self.banner
                        .show(event.name.clone(), event.stage.marker_color(), now);
                } else {
                    self.store.acknowledge_pending();
                    self.seen_pending = self.store.pending_version();
                }
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn banner_visible(&self) -> bool {
        self.banner.visible().is_some()
    }

    /// Draw one frame.
    pub fn render(&mut self, f: &mut Frame) {
        let rects = screen_layout(f.area());
        render_shell(
            f,
            rects,
            ShellView {
                current_state: self.store.current_state(),
                current_stage: self.store.current_stage(),
                banner_enabled: self.store.banner_enabled(),
                event_count: self.store.events().len(),
            },
        );
        render_event_log(f, rects.log, self.store.events(), &mut self.list_state);

        if let Some((message, color)) = self.banner.visible() {
            render_banner(f, f.area(), message, color);
        }
    }
}

/// Map a stage-injection key (`1`-`6`) to its stage.
pub fn stage_for_key(code: KeyCode) -> Option<Stage> {
    match code {
        KeyCode::Char('1') => Some(Stage::Created),
        KeyCode::Char('2') => Some(Stage::Started),
        KeyCode::Char('3') => Some(Stage::Resumed),
        KeyCode::Char('4') => Some(Stage::Paused),
        KeyCode::Char('5') => Some(Stage::Stopped),
        KeyCode::Char('6') => Some(Stage::Destroyed),
        _ => None,
    }
}
