//! Pipeline plugin trait for extensibility.

use crate::{PipelineError, RunContext};

/// A plugin that can hook into the pipeline.
///
/// Plugins receive callbacks before and after each enabled step runs.
///
/// # Example
///
/// ```ignore
/// struct Announce;
///
/// impl Plugin for Announce {
///     fn name(&self) -> &'static str { "announce" }
///
///     fn on_before_step(&self, step: &str, _ctx: &RunContext<'_>) -> Result<(), PipelineError> {
///         eprintln!("==> {}", step);
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin {
    /// The name of this plugin (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called before a step runs.
    ///
    /// # Errors
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_before_step(&self, step: &str, ctx: &RunContext<'_>) -> Result<(), PipelineError> {
        Ok(())
    }

    /// Called after a step completes successfully.
    ///
    /// # Errors
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_after_step(&self, step: &str, ctx: &RunContext<'_>) -> Result<(), PipelineError> {
        Ok(())
    }
}
