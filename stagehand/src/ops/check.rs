//! Check operation - configuration validation.

use stagehand_pipeline::{Diagnostic, Pipeline, Severity};

use crate::{
    config::{Loaded, Source},
    reports::CheckReport,
};

/// Execute the check operation.
///
/// Runs every lint over the manifest and lists the steps a build would run.
pub fn check(loaded: &Loaded, pipeline: &Pipeline) -> CheckReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for diag in pipeline.validate() {
        let msg = describe(&diag);
        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
        }
    }

    CheckReport {
        config_path: loaded.path().to_path_buf(),
        defaults: matches!(loaded.source, Source::Defaults(_)),
        errors,
        warnings,
        enabled_steps: pipeline
            .steps()
            .iter()
            .filter(|step| step.enabled())
            .map(|step| step.name().to_string())
            .collect(),
    }
}

fn describe(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{}\n  --> {}", diag.message, loc),
        None => diag.message.clone(),
    }
}
