//! Plan operation - dry-run.

use stagehand_pipeline::{Pipeline, PipelineError};

use crate::reports::PlanReport;

/// Execute the plan operation. Nothing is spawned.
pub fn plan(pipeline: &Pipeline) -> Result<PlanReport, PipelineError> {
    Ok(PlanReport {
        plan: pipeline.plan()?,
    })
}
