use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use stagehand_pipeline::Pipeline;

use super::prepare;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the configuration file (defaults to ./stagehand.toml, then
    /// ~/.stagehand/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let loaded = prepare(self.config.as_deref(), false);
        let pipeline = Pipeline::new(loaded.manifest.clone(), Vec::new());

        let report = ops::check(&loaded, &pipeline);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
