use stagehand_core::Invocation;
use stagehand_manifest::TranspileConfig;

use super::{create_out_dir, path_arg, require_path};
use crate::{PipelineError, RunContext, StageError, Step};

/// Directory-level transpile: `tool [options...] --outDir <out> <src>`.
pub struct TranspileStep<'a> {
    config: &'a TranspileConfig,
}

impl<'a> TranspileStep<'a> {
    pub fn new(config: &'a TranspileConfig) -> Self {
        Self { config }
    }

    fn invocation(&self) -> Result<Invocation, StageError> {
        require_path(&self.config.src_dir, "transpile.src_dir")?;
        require_path(&self.config.out_dir, "transpile.out_dir")?;

        Ok(Invocation::new(&self.config.tool)
            .args(&self.config.options)
            .arg("--outDir")
            .arg(path_arg(&self.config.out_dir))
            .arg(path_arg(&self.config.src_dir)))
    }

    fn execute(&self, ctx: &mut RunContext<'_>) -> Result<(), StageError> {
        let invocation = self.invocation()?;
        create_out_dir(&self.config.out_dir)?;
        ctx.run(&invocation)?;
        Ok(())
    }

    fn wrap(source: StageError) -> PipelineError {
        PipelineError::Stage {
            stage: "transpile",
            source,
        }
    }
}

impl Step for TranspileStep<'_> {
    fn name(&self) -> &'static str {
        "transpile"
    }

    fn description(&self) -> &'static str {
        "Transpile scripts into the output directory"
    }

    fn enabled(&self) -> bool {
        self.config.enabled
    }

    fn run(&self, ctx: &mut RunContext<'_>) -> Result<(), PipelineError> {
        tracing::info!("transpiling {}", self.config.src_dir.display());
        self.execute(ctx).map_err(Self::wrap)
    }

    fn plan(&self) -> Result<Vec<Invocation>, PipelineError> {
        self.invocation().map(|inv| vec![inv]).map_err(Self::wrap)
    }
}
