use serde::Deserialize;

/// Output and verbosity options
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Log each step and the command lines being executed
    pub verbose: bool,

    /// Also log skipped steps, timings and spawn details
    pub debug: bool,
}
