// Configuration definitions and tests
//

use std::time::Duration;

static DEFAULT_STORAGE_KEY: &str = "mode";
const DEFAULT_TRANSITION: Duration = Duration::from_millis(300);

#[derive(Clone, Debug, PartialEq)]
pub struct ToggleConf {
    storage_key: &'static str,
    transition: Duration,
}

impl Default for ToggleConf {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY,
            transition: DEFAULT_TRANSITION,
        }
    }
}

impl ToggleConf {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(unused)]
    pub fn with_storage_key(mut self, value: &'static str) -> Self {
        self.storage_key = value;
        self
    }

    #[allow(unused)]
    pub fn with_transition(mut self, value: Duration) -> Self {
        self.transition = value;
        self
    }

    pub fn storage_key(&self) -> &'static str {
        self.storage_key
    }

    /// CSS `transition` value applied to both body colors
    pub fn transition_css(&self) -> String {
        let secs = self.transition.as_secs_f64();
        format!("background-color {secs}s, color {secs}s")
    }
}
