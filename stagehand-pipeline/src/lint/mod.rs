//! Static checks over a manifest.
//!
//! Lints never spawn processes. Error diagnostics stop a pipeline run
//! before its first step; warnings are carried into the run summary.

mod lints;

pub use lints::{DuplicatePassLint, EmptyConvertLint, StagePathsLint, UnknownExtensionLint};
use stagehand_manifest::Manifest;

use crate::Diagnostic;

/// A lint that checks the manifest for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the manifest and add any diagnostics.
    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>);
}

/// The lints every pipeline runs.
pub fn default_lints() -> Vec<Box<dyn Lint>> {
    vec![
        Box::new(StagePathsLint),
        Box::new(UnknownExtensionLint),
        Box::new(DuplicatePassLint),
        Box::new(EmptyConvertLint),
    ]
}

/// Run `lints` over `manifest`, collecting every diagnostic.
pub fn check_all(lints: &[Box<dyn Lint>], manifest: &Manifest) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for lint in lints {
        lint.check(manifest, &mut diagnostics);
    }
    diagnostics
}
