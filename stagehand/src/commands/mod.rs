mod build;
mod check;
mod completions;
mod init;
mod plan;

use std::path::Path;

use build::BuildCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use init::InitCommand;
use plan::PlanCommand;
use stagehand_pipeline::PipelineError;

use crate::{
    config::{self, Loaded},
    logging,
};

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for stagehand_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load the configuration, then install logging at the level it asks for.
fn prepare(config: Option<&Path>, verbose: bool) -> Loaded {
    let loaded = config::load(config).unwrap_or_exit();
    let output = &loaded.manifest.output;
    logging::init(verbose || output.verbose, output.debug);
    loaded.report_fallback();
    loaded
}

/// Turn a pipeline failure into a top-level report naming the failed step.
fn pipeline_failure(err: PipelineError) -> eyre::Report {
    if let PipelineError::Invalid { diagnostics } = &err {
        for diagnostic in diagnostics {
            eprintln!("{}", diagnostic);
        }
    }
    let step = err.step();
    eyre::Report::new(err).wrap_err(format!("build failed at {}", step))
}

#[derive(Parser)]
#[command(name = "stagehand")]
#[command(version)]
#[command(about = "Run pre-passes, asset stages and the Go compiler as one build")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Build(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Plan(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: pre-passes, stages, compiler, post-passes
    Build(BuildCommand),

    /// Validate the configuration without running anything
    Check(CheckCommand),

    /// Show the commands a build would run
    Plan(PlanCommand),

    /// Write a starter stagehand.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
