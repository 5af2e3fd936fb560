use std::time::{Duration, Instant};

use ratatui::style::Color;

/// How long a banner stays on screen before auto-dismissing.
pub const BANNER_DURATION: Duration = Duration::from_millis(2500);

struct ActiveBanner {
    message: String,
    color: Color,
    expires_at: Instant,
}

/// One-shot transient notification state.
///
/// At most one banner exists at a time; showing a new one replaces whatever
/// is currently visible. The app ties dismissal (timeout or manual) to
/// acknowledging the store's pending slot.
#[derive(Default)]
pub struct Banner {
    current: Option<ActiveBanner>,
}

impl Banner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the banner with a message and marker color, starting the
    /// auto-dismiss clock at `now`.
    pub fn show(&mut self, message: String, color: Color, now: Instant) {
        self.current = Some(ActiveBanner {
            message,
            color,
            expires_at: now + BANNER_DURATION,
        });
    }

    /// Expire the banner if its time is up. Returns `true` exactly when this
    /// call dismissed it.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(active) if now >= active.expires_at => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Hide the banner early. Returns `true` if one was visible.
    pub fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Message and color of the visible banner, if any.
    pub fn visible(&self) -> Option<(&str, Color)> {
        self.current
            .as_ref()
            .map(|active| (active.message.as_str(), active.color))
    }
}
