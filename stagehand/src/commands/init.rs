use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to write stagehand.toml into
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Overwrite an existing stagehand.toml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::init(&self.output, self.force).wrap_err_with(|| {
            format!("Failed to write configuration in {}", self.output.display())
        })?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
