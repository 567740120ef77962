//! Lint for a conversion stage with nothing to convert.

use stagehand_manifest::Manifest;

use crate::{Diagnostic, lint::Lint};

/// Warns when the conversion stage is enabled without source directories.
pub struct EmptyConvertLint;

impl Lint for EmptyConvertLint {
    fn name(&self) -> &'static str {
        "empty-convert"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        if manifest.convert.enabled && manifest.convert.src_dirs.is_empty() {
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    "convert stage is enabled but has no source directories",
                )
                .at("convert.src_dirs"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_enabled_without_dirs_warns() {
        let manifest = Manifest::from_str("[convert]\nenabled = true\n").unwrap();
        let mut diagnostics = Vec::new();
        EmptyConvertLint.check(&manifest, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
    }
}
