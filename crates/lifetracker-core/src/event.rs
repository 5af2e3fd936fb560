use chrono::Local;
use ratatui::style::Color;

/// The six fixed controller lifecycle stages delivered by the host.
///
/// The set is closed and no transition order is validated anywhere: the store
/// records whatever the host delivers, in delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Created,
    Started,
    Resumed,
    Paused,
    Stopped,
    Destroyed,
}

impl Stage {
    /// All stages in canonical launch-to-teardown order.
    pub const ALL: [Stage; 6] = [
        Stage::Created,
        Stage::Started,
        Stage::Resumed,
        Stage::Paused,
        Stage::Stopped,
        Stage::Destroyed,
    ];

    /// Name of the observer hook this stage is routed to.
    pub fn hook_name(self) -> &'static str {
        match self {
            Stage::Created => "on_create",
            Stage::Started => "on_start",
            Stage::Resumed => "on_resume",
            Stage::Paused => "on_pause",
            Stage::Stopped => "on_stop",
            Stage::Destroyed => "on_destroy",
        }
    }

    /// Fixed display color for this stage's marker in the log list and
    /// status card. Purely cosmetic.
    pub fn marker_color(self) -> Color {
        match self {
            Stage::Created => Color::Green,
            Stage::Started => Color::Blue,
            Stage::Resumed => Color::LightGreen,
            Stage::Paused => Color::Yellow,
            Stage::Stopped => Color::LightRed,
            Stage::Destroyed => Color::Red,
        }
    }
}

/// One recorded lifecycle transition. Built once per host notification and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleEvent {
    pub name: String,
    pub timestamp: String,
    pub stage: Stage,
}

impl LifecycleEvent {
    /// Build an event for `stage` stamped with the current wall-clock time
    /// at millisecond precision.
    pub fn now(stage: Stage) -> Self {
        Self::with_timestamp(stage, Local::now().format("%H:%M:%S%.3f").to_string())
    }

    /// Build an event with an explicit timestamp string.
    pub fn with_timestamp(stage: Stage, timestamp: String) -> Self {
        Self {
            name: stage.hook_name().to_string(),
            timestamp,
            stage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_names_are_fixed() {
        assert_eq!(Stage::Created.hook_name(), "on_create");
        assert_eq!(Stage::Started.hook_name(), "on_start");
        assert_eq!(Stage::Resumed.hook_name(), "on_resume");
        assert_eq!(Stage::Paused.hook_name(), "on_pause");
        assert_eq!(Stage::Stopped.hook_name(), "on_stop");
        assert_eq!(Stage::Destroyed.hook_name(), "on_destroy");
    }

    #[test]
    fn every_stage_has_a_distinct_color() {
        let colors: Vec<Color> = Stage::ALL.iter().map(|s| s.marker_color()).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn now_stamps_millisecond_precision() {
        let ev = LifecycleEvent::now(Stage::Created);
        // HH:MM:SS.mmm
        assert_eq!(ev.timestamp.len(), 12);
        assert_eq!(&ev.timestamp[8..9], ".");
        assert_eq!(ev.name, "on_create");
        assert_eq!(ev.stage, Stage::Created);
    }

    #[test]
    fn event_name_comes_from_stage() {
        let ev = LifecycleEvent::with_timestamp(Stage::Paused, "12:00:00.000".into());
        assert_eq!(ev.name, "on_pause");
        assert_eq!(ev.timestamp, "12:00:00.000");
    }
}
