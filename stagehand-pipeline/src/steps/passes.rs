use stagehand_core::Invocation;
use stagehand_manifest::{Pass, PassPhase};

use crate::{PipelineError, RunContext, Step};

/// Run the enabled passes of `phase`, in declaration order.
///
/// Stops at the first failing pass; later passes of the phase do not run.
pub fn run_passes(
    passes: &[Pass],
    phase: PassPhase,
    ctx: &mut RunContext<'_>,
) -> Result<(), PipelineError> {
    for pass in passes {
        if pass.phase != phase {
            continue;
        }
        if !pass.enabled {
            tracing::debug!("skipping disabled {}-pass '{}'", phase, pass.name);
            continue;
        }

        tracing::info!("running {}-pass '{}'", phase, pass.name);
        ctx.run(&invocation(pass))
            .map_err(|source| PipelineError::Pass {
                phase,
                name: pass.name.clone(),
                source,
            })?;
    }
    Ok(())
}

fn invocation(pass: &Pass) -> Invocation {
    Invocation::new(&pass.command).args(&pass.args)
}

/// All passes of one phase as a single pipeline step.
pub struct PassStep<'a> {
    passes: &'a [Pass],
    phase: PassPhase,
}

impl<'a> PassStep<'a> {
    pub fn new(passes: &'a [Pass], phase: PassPhase) -> Self {
        Self { passes, phase }
    }

    fn active(&self) -> impl Iterator<Item = &'a Pass> + '_ {
        self.passes
            .iter()
            .filter(move |p| p.phase == self.phase && p.enabled)
    }
}

impl Step for PassStep<'_> {
    fn name(&self) -> &'static str {
        match self.phase {
            PassPhase::Pre => "pre-passes",
            PassPhase::Post => "post-passes",
        }
    }

    fn description(&self) -> &'static str {
        match self.phase {
            PassPhase::Pre => "Run custom passes before the build",
            PassPhase::Post => "Run custom passes after the build",
        }
    }

    fn enabled(&self) -> bool {
        self.active().next().is_some()
    }

    fn run(&self, ctx: &mut RunContext<'_>) -> Result<(), PipelineError> {
        run_passes(self.passes, self.phase, ctx)
    }

    fn plan(&self) -> Result<Vec<Invocation>, PipelineError> {
        Ok(self.active().map(invocation).collect())
    }
}

#[cfg(test)]
mod tests {
    use stagehand_core::EnvOverlay;

    use super::*;
    use crate::testing::RecordingRunner;

    fn pass(name: &str, phase: PassPhase, enabled: bool) -> Pass {
        Pass {
            name: name.to_string(),
            phase,
            command: name.to_string(),
            args: vec!["--flag".to_string()],
            enabled,
        }
    }

    #[test]
    fn test_empty_pass_list_spawns_nothing() {
        let runner = RecordingRunner::new();
        let env = EnvOverlay::new();
        let mut ctx = RunContext::new(&runner, &env);

        run_passes(&[], PassPhase::Pre, &mut ctx).unwrap();

        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_runs_matching_enabled_passes_in_order() {
        let passes = vec![
            pass("a", PassPhase::Pre, true),
            pass("b", PassPhase::Post, true),
            pass("c", PassPhase::Pre, false),
            pass("d", PassPhase::Pre, true),
        ];
        let runner = RecordingRunner::new();
        let env = EnvOverlay::new();
        let mut ctx = RunContext::new(&runner, &env);

        run_passes(&passes, PassPhase::Pre, &mut ctx).unwrap();

        assert_eq!(runner.programs(), vec!["a", "d"]);
        assert_eq!(runner.calls()[0].arg_list(), ["--flag"]);
    }

    #[test]
    fn test_first_failure_stops_phase() {
        let passes = vec![
            pass("a", PassPhase::Pre, true),
            pass("b", PassPhase::Pre, false),
            pass("c", PassPhase::Pre, true),
            pass("d", PassPhase::Pre, true),
        ];
        let runner = RecordingRunner::new().fail_program("c");
        let env = EnvOverlay::new();
        let mut ctx = RunContext::new(&runner, &env);

        let err = run_passes(&passes, PassPhase::Pre, &mut ctx).unwrap_err();

        assert_eq!(runner.programs(), vec!["a", "c"]);
        match err {
            PipelineError::Pass { phase, name, .. } => {
                assert_eq!(phase, PassPhase::Pre);
                assert_eq!(name, "c");
            }
            other => panic!("expected pass error, got {:?}", other),
        }
    }

    #[test]
    fn test_passes_receive_overlay() {
        let passes = vec![pass("gen", PassPhase::Post, true)];
        let runner = RecordingRunner::new();
        let env = EnvOverlay::new().with("GOFLAGS", "-mod=mod");
        let mut ctx = RunContext::new(&runner, &env);

        run_passes(&passes, PassPhase::Post, &mut ctx).unwrap();

        assert_eq!(runner.envs()[0].get("GOFLAGS"), Some("-mod=mod"));
    }

    #[test]
    fn test_pass_step_enabled_and_plan() {
        let passes = vec![
            pass("a", PassPhase::Pre, false),
            pass("b", PassPhase::Post, true),
        ];

        let pre = PassStep::new(&passes, PassPhase::Pre);
        assert!(!pre.enabled());
        assert!(pre.plan().unwrap().is_empty());

        let post = PassStep::new(&passes, PassPhase::Post);
        assert!(post.enabled());
        assert_eq!(post.name(), "post-passes");
        assert_eq!(post.plan().unwrap()[0].to_string(), "b --flag");
    }
}
