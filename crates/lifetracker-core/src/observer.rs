use crate::event::Stage;
use crate::store::TrackerState;

/// The six fixed lifecycle hooks, one method per stage.
///
/// The host driver calls exactly one hook per notification, synchronously,
/// on the main thread. There is nothing to suppress or debounce and no error
/// to report: hosts deliver well-formed notifications or none at all.
pub trait LifecycleObserver {
    fn on_create(&mut self);
    fn on_start(&mut self);
    fn on_resume(&mut self);
    fn on_pause(&mut self);
    fn on_stop(&mut self);
    fn on_destroy(&mut self);
}

/// Route a stage to its hook on the observer.
pub fn deliver(observer: &mut dyn LifecycleObserver, stage: Stage) {
    match stage {
        Stage::Created => observer.on_create(),
        Stage::Started => observer.on_start(),
        Stage::Resumed => observer.on_resume(),
        Stage::Paused => observer.on_pause(),
        Stage::Stopped => observer.on_stop(),
        Stage::Destroyed => observer.on_destroy(),
    }
}

impl TrackerState {
    fn notify(&mut self, stage: Stage) {
        tracing::info!(hook = stage.hook_name(), "lifecycle notification");
        self.append(stage);
    }
}

impl LifecycleObserver for TrackerState {
    fn on_create(&mut self) {
        self.notify(Stage::Created);
    }

    fn on_start(&mut self) {
        self.notify(Stage::Started);
    }

    fn on_resume(&mut self) {
        self.notify(Stage::Resumed);
    }

    fn on_pause(&mut self) {
        self.notify(Stage::Paused);
    }

    fn on_stop(&mut self) {
        self.notify(Stage::Stopped);
    }

    fn on_destroy(&mut self) {
        self.notify(Stage::Destroyed);
    }
}
