//! Build operation - run the pipeline.

use stagehand_core::{Invocation, ProcessRunner};
use stagehand_pipeline::{Pipeline, PipelineError};

use crate::reports::{BuildReport, StepLine};

/// Execute the build operation through `runner`.
pub fn build(pipeline: &Pipeline, runner: &dyn ProcessRunner) -> Result<BuildReport, PipelineError> {
    let summary = pipeline.run(runner)?;

    let compile_command = Invocation::new(&pipeline.manifest().compiler.path)
        .args(&summary.compile_args)
        .to_string();

    Ok(BuildReport {
        steps: summary
            .steps
            .iter()
            .map(|record| StepLine {
                name: record.step.to_string(),
                invocations: record.invocations,
                elapsed: record.elapsed,
            })
            .collect(),
        warnings: summary.warnings.iter().map(|d| d.message.clone()).collect(),
        compile_command,
    })
}

#[cfg(test)]
mod tests {
    use stagehand_manifest::{Manifest, PassPhase};
    use stagehand_pipeline::testing::RecordingRunner;

    use super::*;

    #[test]
    fn test_build_report_lists_steps() {
        let mut manifest = Manifest::default();
        manifest.compiler.extensions = vec!["code-contracts".to_string(), "x".to_string()];
        let pipeline = Pipeline::new(manifest, vec!["./...".to_string()]);
        let runner = RecordingRunner::new();

        let report = build(&pipeline, &runner).unwrap();

        assert_eq!(report.steps.len(), 1);
        assert_eq!(report.steps[0].name, "compile");
        assert_eq!(report.compile_command, "go build ./... -tags=contracts");
        assert_eq!(report.warnings, vec!["unknown extension 'x' will be ignored"]);
    }

    #[test]
    fn test_build_propagates_failure() {
        let mut manifest = Manifest::default();
        manifest.passes.push(stagehand_manifest::Pass {
            name: "lint".to_string(),
            phase: PassPhase::Post,
            command: "golangci-lint".to_string(),
            args: vec!["run".to_string()],
            enabled: true,
        });
        let pipeline = Pipeline::new(manifest, vec![".".to_string()]);
        let runner = RecordingRunner::new().fail_program("golangci-lint");

        let err = build(&pipeline, &runner).unwrap_err();

        assert_eq!(err.step(), "post-passes");
        assert_eq!(runner.programs(), vec!["go", "golangci-lint"]);
    }
}
