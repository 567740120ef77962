//! Lint for enabled stages without source or output locations.

use std::path::Path;

use stagehand_manifest::Manifest;

use crate::{Diagnostic, lint::Lint};

/// Errors on enabled transpile/style stages with an empty `src_dir` or
/// `out_dir`. Disabled stages are not checked.
pub struct StagePathsLint;

impl Lint for StagePathsLint {
    fn name(&self) -> &'static str {
        "stage-paths"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let stages = [
            (
                "transpile",
                manifest.transpile.enabled,
                &manifest.transpile.src_dir,
                &manifest.transpile.out_dir,
            ),
            (
                "style",
                manifest.style.enabled,
                &manifest.style.src_dir,
                &manifest.style.out_dir,
            ),
        ];

        for (stage, enabled, src_dir, out_dir) in stages {
            if !enabled {
                continue;
            }
            for (key, path) in [("src_dir", src_dir), ("out_dir", out_dir)] {
                if is_empty(path) {
                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!("{} stage is enabled but '{}' is not set", stage, key),
                        )
                        .at(format!("{}.{}", stage, key)),
                    );
                }
            }
        }

        for (index, dir) in manifest.convert.src_dirs.iter().enumerate() {
            if manifest.convert.enabled && is_empty(dir) {
                diagnostics.push(
                    Diagnostic::error(self.name(), "convert stage has an empty source directory")
                        .at(format!("convert.src_dirs[{}]", index)),
                );
            }
        }
    }
}

fn is_empty(path: &Path) -> bool {
    path.as_os_str().is_empty()
}
