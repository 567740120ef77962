//! Lint for extension tokens with no flag mapping.

use stagehand_manifest::Manifest;

use crate::{Diagnostic, flags, lint::Lint};

/// Warns about extension tokens the flag composer will ignore.
pub struct UnknownExtensionLint;

impl Lint for UnknownExtensionLint {
    fn name(&self) -> &'static str {
        "unknown-extension"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for token in &manifest.compiler.extensions {
            if flags::extension_flag(token).is_none() {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("unknown extension '{}' will be ignored", token),
                    )
                    .at("compiler.extensions"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_unknown_extension_warns() {
        let manifest = Manifest::from_str(
            r#"
            [compiler]
            extensions = ["code-contracts", "hot-reload"]
            "#,
        )
        .unwrap();

        let mut diagnostics = Vec::new();
        UnknownExtensionLint.check(&manifest, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert!(diagnostics[0].message.contains("hot-reload"));
    }
}
