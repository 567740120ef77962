use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use stagehand_core::SystemRunner;
use stagehand_manifest::Manifest;
use stagehand_pipeline::Pipeline;

use super::{pipeline_failure, prepare};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BuildCommand {
    /// Path to the configuration file (defaults to ./stagehand.toml, then
    /// ~/.stagehand/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log every command as it is executed
    #[arg(short, long)]
    pub verbose: bool,

    /// Output path, passed to the compiler as `-o <PATH>`
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Skip the transpile stage
    #[arg(long, alias = "skip-ts")]
    pub skip_transpile: bool,

    /// Skip the style-sheet stage
    #[arg(long, alias = "skip-scss")]
    pub skip_style: bool,

    /// Skip the per-file conversion stage
    #[arg(long, alias = "skip-php")]
    pub skip_convert: bool,

    /// Print the commands that would run without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Arguments for the compiler, e.g. `./cmd/server` or `test -race ./...`
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "ARGS"
    )]
    pub args: Vec<String>,
}

impl BuildCommand {
    pub fn run(&self) -> Result<()> {
        let mut loaded = prepare(self.config.as_deref(), self.verbose);
        self.apply_skips(&mut loaded.manifest);
        let pipeline = Pipeline::new(loaded.manifest, self.compiler_args());

        let mut out = TerminalOutput::new();
        if self.dry_run {
            let report = ops::plan(&pipeline).map_err(pipeline_failure)?;
            report.render(&mut out);
            return Ok(());
        }

        let report = ops::build(&pipeline, &SystemRunner).map_err(pipeline_failure)?;
        report.render(&mut out);
        Ok(())
    }

    /// Positional arguments, with `-o <PATH>` appended when given.
    fn compiler_args(&self) -> Vec<String> {
        let mut args = self.args.clone();
        if let Some(output) = &self.output {
            args.push("-o".to_string());
            args.push(output.to_string_lossy().into_owned());
        }
        args
    }

    fn apply_skips(&self, manifest: &mut Manifest) {
        if self.skip_transpile {
            manifest.transpile.enabled = false;
        }
        if self.skip_style {
            manifest.style.enabled = false;
        }
        if self.skip_convert {
            manifest.convert.enabled = false;
        }
    }
}
