use stagehand_core::Invocation;
use stagehand_manifest::CompilerConfig;

use crate::{PipelineError, RunContext, Step, flags};

/// The primary compiler invocation with composed arguments.
pub struct CompileStep<'a> {
    config: &'a CompilerConfig,
    args: &'a [String],
}

impl<'a> CompileStep<'a> {
    pub fn new(config: &'a CompilerConfig, args: &'a [String]) -> Self {
        Self { config, args }
    }

    pub fn invocation(&self) -> Invocation {
        let args = flags::compose(self.args, &self.config.default_flags, &self.config.extensions);
        Invocation::new(&self.config.path).args(args)
    }
}

impl Step for CompileStep<'_> {
    fn name(&self) -> &'static str {
        "compile"
    }

    fn description(&self) -> &'static str {
        "Run the primary compiler"
    }

    fn run(&self, ctx: &mut RunContext<'_>) -> Result<(), PipelineError> {
        ctx.run(&self.invocation())
            .map_err(|source| PipelineError::Compile { source })
    }

    fn plan(&self) -> Result<Vec<Invocation>, PipelineError> {
        Ok(vec![self.invocation()])
    }
}
