//! Lint for passes sharing a name.

use std::collections::HashSet;

use stagehand_manifest::Manifest;

use crate::{Diagnostic, lint::Lint};

/// Warns when two passes of the same phase share a name, since errors and
/// logs identify passes by name.
pub struct DuplicatePassLint;

impl Lint for DuplicatePassLint {
    fn name(&self) -> &'static str {
        "duplicate-pass"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();

        for pass in &manifest.passes {
            let key = (pass.phase, pass.name.as_str());
            if !seen.insert(key) && reported.insert(key) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("more than one {}-pass is named '{}'", pass.phase, pass.name),
                    )
                    .at("passes"),
                );
            }
        }
    }
}
