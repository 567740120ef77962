use std::path::PathBuf;

use stagehand_core::Invocation;
use stagehand_manifest::StyleConfig;

use super::{create_out_dir, path_arg, require_path};
use crate::{PipelineError, RunContext, StageError, Step};

/// Style-sheet compile: `tool [options...] <src>/*.<ext> <out>`.
///
/// The glob is handed to the tool unexpanded.
pub struct StyleStep<'a> {
    config: &'a StyleConfig,
}

impl<'a> StyleStep<'a> {
    pub fn new(config: &'a StyleConfig) -> Self {
        Self { config }
    }

    /// Source pattern passed to the tool, e.g. `styles/*.scss`.
    pub fn source_glob(&self) -> PathBuf {
        self.config
            .src_dir
            .join(format!("*.{}", self.config.extension))
    }

    fn invocation(&self) -> Result<Invocation, StageError> {
        require_path(&self.config.src_dir, "style.src_dir")?;
        require_path(&self.config.out_dir, "style.out_dir")?;

        Ok(Invocation::new(&self.config.tool)
            .args(&self.config.options)
            .arg(path_arg(&self.source_glob()))
            .arg(path_arg(&self.config.out_dir)))
    }

    fn execute(&self, ctx: &mut RunContext<'_>) -> Result<(), StageError> {
        let invocation = self.invocation()?;
        create_out_dir(&self.config.out_dir)?;
        ctx.run(&invocation)?;
        Ok(())
    }

    fn wrap(source: StageError) -> PipelineError {
        PipelineError::Stage {
            stage: "style",
            source,
        }
    }
}

impl Step for StyleStep<'_> {
    fn name(&self) -> &'static str {
        "style"
    }

    fn description(&self) -> &'static str {
        "Compile style sheets into the output directory"
    }

    fn enabled(&self) -> bool {
        self.config.enabled
    }

    fn run(&self, ctx: &mut RunContext<'_>) -> Result<(), PipelineError> {
        tracing::info!("compiling style sheets from {}", self.config.src_dir.display());
        self.execute(ctx).map_err(Self::wrap)
    }

    fn plan(&self) -> Result<Vec<Invocation>, PipelineError> {
        self.invocation().map(|inv| vec![inv]).map_err(Self::wrap)
    }
}
