//! Pipeline step trait.

use stagehand_core::Invocation;

use crate::{PipelineError, RunContext};

/// One unit of the pipeline: a pass phase, an auxiliary stage, or the
/// primary compilation.
///
/// The pipeline runs steps in a fixed order and stops at the first error.
pub trait Step {
    /// The name of this step (used in logs, errors and plugin hooks).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this step does.
    fn description(&self) -> &'static str;

    /// Whether the step has anything to do. Disabled steps are skipped
    /// without side effects and without plugin hooks.
    fn enabled(&self) -> bool {
        true
    }

    /// Run this step.
    ///
    /// # Errors
    ///
    /// Returns the first failure; the pipeline does not continue past it.
    fn run(&self, ctx: &mut RunContext<'_>) -> Result<(), PipelineError>;

    /// The processes this step would spawn, without spawning them.
    ///
    /// Steps that depend on the filesystem (the conversion stage) read it
    /// here, so planning can fail the same way running would.
    fn plan(&self) -> Result<Vec<Invocation>, PipelineError>;
}
