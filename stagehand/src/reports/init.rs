//! Init command report data structures.

use std::path::PathBuf;

use stagehand_core::WriteResult;

use super::output::{Output, Report};

/// Report data from writing a starter configuration.
#[derive(Debug)]
pub struct InitReport {
    pub path: PathBuf,
    pub result: WriteResult,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        let path = self.path.display().to_string();
        match self.result {
            WriteResult::Written => {
                out.added_item(&path);
                out.newline();
                out.section("Next steps");
                out.list_item(&format!("enable the stages you need in {}", path));
                out.list_item("stagehand check");
                out.list_item("stagehand build ./...");
            }
            WriteResult::Skipped => {
                out.skipped_item(&path);
                out.warning(&format!(
                    "{} already exists; pass --force to overwrite it",
                    path
                ));
            }
        }
    }
}
