use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};
use stagehand_pipeline::Pipeline;

use super::{pipeline_failure, prepare};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct PlanCommand {
    /// Path to the configuration file (defaults to ./stagehand.toml, then
    /// ~/.stagehand/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: PlanFormat,

    /// Arguments for the compiler
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

impl PlanCommand {
    pub fn run(&self) -> Result<()> {
        let loaded = prepare(self.config.as_deref(), false);
        let pipeline = Pipeline::new(loaded.manifest, self.args.clone());

        let report = ops::plan(&pipeline).map_err(pipeline_failure)?;
        match self.format {
            PlanFormat::Text => report.render(&mut TerminalOutput::new()),
            PlanFormat::Json => {
                let json = report.to_json().wrap_err("Failed to serialize plan")?;
                println!("{}", json);
            }
        }
        Ok(())
    }
}
