//! Build command report data structures.

use std::time::Duration;

use super::output::{Output, Report};

/// Report data from a successful build.
#[derive(Debug)]
pub struct BuildReport {
    /// Steps that ran, in order.
    pub steps: Vec<StepLine>,
    /// Warning messages from validation.
    pub warnings: Vec<String>,
    /// The primary compiler command line.
    pub compile_command: String,
}

/// One executed step.
#[derive(Debug)]
pub struct StepLine {
    pub name: String,
    pub invocations: usize,
    pub elapsed: Duration,
}

impl BuildReport {
    fn total(&self) -> Duration {
        self.steps.iter().map(|s| s.elapsed).sum()
    }
}

impl Report for BuildReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        out.section("Steps");
        for (i, step) in self.steps.iter().enumerate() {
            out.numbered_item(
                i + 1,
                &format!(
                    "{} ({} {}, {:.1?})",
                    step.name,
                    step.invocations,
                    if step.invocations == 1 { "process" } else { "processes" },
                    step.elapsed
                ),
            );
        }
        out.newline();

        out.key_value("Compiled", &self.compile_command);
        out.key_value("Total", &format!("{:.1?}", self.total()));
        out.newline();
        out.preformatted("Build completed successfully");
    }
}
