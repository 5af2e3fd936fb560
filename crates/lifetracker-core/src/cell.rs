/// A single observable value.
///
/// Every mutation bumps a monotonically increasing version stamp. The
/// presentation layer reads the value each frame and detects transitions by
/// comparing the stamp against the one it saw last frame — the immediate-mode
/// equivalent of a change subscription. Mutation only happens through the
/// owning store; readers get shared access only. Single-threaded by contract.
#[derive(Debug)]
pub struct StateCell<T> {
    value: T,
    version: u64,
}

impl<T> StateCell<T> {
    pub fn new(value: T) -> Self {
        Self { value, version: 0 }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Current version stamp. Starts at 0 and bumps on every mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Replace the value, bumping the version.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.version += 1;
    }

    /// Mutate the value in place, bumping the version.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
        self.version += 1;
    }

    /// Whether the cell has been mutated since `version` was observed.
    pub fn changed_since(&self, version: u64) -> bool {
        self.version != version
    }
}
