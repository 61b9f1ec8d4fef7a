use crate::domain::BatchConfig;
use crate::ports::ProcessRunner;

/// Application context holding dependencies for command execution.
pub struct AppContext<R: ProcessRunner> {
    config: BatchConfig,
    runner: R,
}

impl<R: ProcessRunner> AppContext<R> {
    /// Create a new application context.
    pub fn new(config: BatchConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Get the active batch configuration.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Get the process runner used for compile and execute steps.
    pub fn runner(&self) -> &R {
        &self.runner
    }
}
