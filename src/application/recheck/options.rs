//! Recheck Options

/// Options for the recheck use case
#[derive(Debug, Clone, Default)]
pub struct RecheckOptions {
    /// Leave the shadow directory in place after the run (for inspection)
    pub keep_shadow_directory: bool,
}

impl RecheckOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keep_shadow_directory(mut self, keep: bool) -> Self {
        self.keep_shadow_directory = keep;
        self
    }
}
