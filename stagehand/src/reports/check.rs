//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from configuration validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path the configuration was looked up at.
    pub config_path: PathBuf,
    /// Whether the file was missing and defaults were checked instead.
    pub defaults: bool,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Steps a build would run.
    pub enabled_steps: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        if self.defaults {
            out.preformatted(&format!(
                "✓ {} not found, built-in defaults are valid",
                self.config_path.display()
            ));
        } else {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        }
        out.newline();

        out.section("Build steps");
        for step in &self.enabled_steps {
            out.list_item(step);
        }
    }
}
