//! Dry-run description of a pipeline.

use serde::Serialize;
use stagehand_core::Invocation;

use crate::Diagnostic;

/// What a pipeline run would do, step by step.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    /// Steps in execution order, including disabled ones.
    pub steps: Vec<PlannedStep>,
    /// Lint results for the manifest.
    pub diagnostics: Vec<Diagnostic>,
}

/// One step of a [`Plan`].
#[derive(Debug, Clone, Serialize)]
pub struct PlannedStep {
    pub name: &'static str,
    pub description: &'static str,
    pub enabled: bool,
    /// Processes the step would spawn, in order.
    pub invocations: Vec<Invocation>,
}

impl Plan {
    /// Total number of processes the run would spawn.
    pub fn invocation_count(&self) -> usize {
        self.steps.iter().map(|s| s.invocations.len()).sum()
    }

    /// Steps that would actually run.
    pub fn enabled_steps(&self) -> impl Iterator<Item = &PlannedStep> {
        self.steps.iter().filter(|s| s.enabled)
    }
}
