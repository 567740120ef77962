//! Pipeline orchestrator.

use std::time::{Duration, Instant};

use stagehand_core::ProcessRunner;
use stagehand_manifest::{Manifest, PassPhase};

use crate::{
    Diagnostic, Plan, PlannedStep, PipelineError, Plugin, RunContext, Step, StepRecord, flags,
    lint::{self, Lint},
    steps::{CompileStep, ConvertStep, PassStep, StyleStep, TranspileStep},
};

/// The build pipeline orchestrator.
///
/// A pipeline owns the manifest and the caller's compiler arguments. It
/// validates the manifest, then runs its steps in a fixed order, calling
/// plugin hooks before and after each enabled step:
///
/// 1. pre-passes
/// 2. transpile
/// 3. style
/// 4. convert
/// 5. compile
/// 6. post-passes
///
/// # Example
///
/// ```ignore
/// let summary = Pipeline::new(manifest, args)
///     .plugin(MyPlugin)
///     .run(&SystemRunner)?;
/// ```
pub struct Pipeline {
    manifest: Manifest,
    args: Vec<String>,
    lints: Vec<Box<dyn Lint>>,
    plugins: Vec<Box<dyn Plugin>>,
}

/// Outcome of a successful pipeline run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Steps that ran, in execution order. Disabled steps are absent.
    pub steps: Vec<StepRecord>,
    /// Warning diagnostics from validation.
    pub warnings: Vec<Diagnostic>,
    /// Arguments the primary compiler was invoked with.
    pub compile_args: Vec<String>,
}

impl RunSummary {
    /// Total processes spawned by the run.
    pub fn invocations(&self) -> usize {
        self.steps.iter().map(|s| s.invocations).sum()
    }

    /// Total wall-clock time across all steps.
    pub fn elapsed(&self) -> Duration {
        self.steps.iter().map(|s| s.elapsed).sum()
    }
}

impl Pipeline {
    /// Create a pipeline with the default lints and no plugins.
    pub fn new(manifest: Manifest, args: Vec<String>) -> Self {
        Self {
            manifest,
            args,
            lints: lint::default_lints(),
            plugins: Vec::new(),
        }
    }

    /// Add a lint to run during validation.
    pub fn lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Add a plugin to receive step lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// The composed argument list for the primary compiler.
    pub fn compose_args(&self) -> Vec<String> {
        flags::compose(
            &self.args,
            &self.manifest.compiler.default_flags,
            &self.manifest.compiler.extensions,
        )
    }

    /// Every step in execution order, enabled or not.
    pub fn steps(&self) -> Vec<Box<dyn Step + '_>> {
        let m = &self.manifest;
        vec![
            Box::new(PassStep::new(&m.passes, PassPhase::Pre)),
            Box::new(TranspileStep::new(&m.transpile)),
            Box::new(StyleStep::new(&m.style)),
            Box::new(ConvertStep::new(&m.convert)),
            Box::new(CompileStep::new(&m.compiler, &self.args)),
            Box::new(PassStep::new(&m.passes, PassPhase::Post)),
        ]
    }

    /// Run all lints over the manifest.
    pub fn validate(&self) -> Vec<Diagnostic> {
        lint::check_all(&self.lints, &self.manifest)
    }

    /// Run the pipeline, spawning every process through `runner`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Invalid`] without spawning anything if a
    /// lint reports an error. Otherwise returns the first failing step;
    /// later steps, including post-passes, do not run.
    pub fn run(&self, runner: &dyn ProcessRunner) -> Result<RunSummary, PipelineError> {
        let warnings = self.checked()?;

        let mut ctx = RunContext::new(runner, &self.manifest.env);
        for step in self.steps() {
            self.run_step(step.as_ref(), &mut ctx)?;
        }

        Ok(RunSummary {
            steps: ctx.completed,
            warnings,
            compile_args: self.compose_args(),
        })
    }

    /// Describe what [`Pipeline::run`] would do without spawning anything.
    ///
    /// # Errors
    ///
    /// Fails like `run` on lint errors, and when a conversion source
    /// directory cannot be walked.
    pub fn plan(&self) -> Result<Plan, PipelineError> {
        let diagnostics = self.checked()?;

        let mut steps = Vec::new();
        for step in self.steps() {
            let enabled = step.enabled();
            let invocations = if enabled { step.plan()? } else { Vec::new() };
            steps.push(PlannedStep {
                name: step.name(),
                description: step.description(),
                enabled,
                invocations,
            });
        }

        Ok(Plan { steps, diagnostics })
    }

    /// Validate and fail on errors. Returns the warnings; callers report them.
    fn checked(&self) -> Result<Vec<Diagnostic>, PipelineError> {
        let (errors, warnings): (Vec<_>, Vec<_>) = self
            .validate()
            .into_iter()
            .partition(|d| d.severity.is_error());

        tracing::debug!("{} lint warnings, {} errors", warnings.len(), errors.len());
        if !errors.is_empty() {
            return Err(PipelineError::Invalid {
                diagnostics: errors,
            });
        }
        Ok(warnings)
    }

    /// Run a single step with plugin hooks.
    fn run_step(&self, step: &dyn Step, ctx: &mut RunContext<'_>) -> Result<(), PipelineError> {
        let name = step.name();
        if !step.enabled() {
            tracing::debug!("skipping {} (disabled)", name);
            return Ok(());
        }

        for plugin in &self.plugins {
            plugin.on_before_step(name, ctx)?;
        }

        let started = Instant::now();
        let spawned = ctx.invocations();
        step.run(ctx)?;
        let elapsed = started.elapsed();
        tracing::debug!("{} finished in {:?}", name, elapsed);

        ctx.completed.push(StepRecord {
            step: name,
            invocations: ctx.invocations() - spawned,
            elapsed,
        });

        for plugin in &self.plugins {
            plugin.on_after_step(name, ctx)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        str::FromStr,
        sync::{Arc, Mutex},
    };

    use stagehand_manifest::{Pass, StyleConfig};
    use tempfile::TempDir;

    use super::*;
    use crate::{StageError, testing::RecordingRunner};

    struct RecordingPlugin {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingPlugin {
        fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
            let events = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    events: events.clone(),
                },
                events,
            )
        }
    }

    impl Plugin for RecordingPlugin {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn on_before_step(&self, step: &str, _ctx: &RunContext<'_>) -> Result<(), PipelineError> {
            self.events.lock().unwrap().push(format!("before:{}", step));
            Ok(())
        }

        fn on_after_step(&self, step: &str, _ctx: &RunContext<'_>) -> Result<(), PipelineError> {
            self.events.lock().unwrap().push(format!("after:{}", step));
            Ok(())
        }
    }

    fn pass(name: &str, phase: PassPhase, enabled: bool) -> Pass {
        Pass {
            name: name.to_string(),
            phase,
            command: name.to_string(),
            args: Vec::new(),
            enabled,
        }
    }

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_compile_only_by_default() {
        let runner = RecordingRunner::new();
        let summary = Pipeline::new(Manifest::default(), args(&["./..."]))
            .run(&runner)
            .unwrap();

        assert_eq!(runner.programs(), vec!["go"]);
        assert_eq!(summary.compile_args, args(&["build", "./..."]));
        assert_eq!(summary.steps.len(), 1);
        assert_eq!(summary.steps[0].step, "compile");
        assert_eq!(summary.invocations(), 1);
    }

    #[test]
    fn test_failing_pre_pass_stops_pipeline() {
        let mut manifest = Manifest::default();
        manifest.passes = vec![
            pass("a", PassPhase::Pre, true),
            pass("b", PassPhase::Pre, false),
            pass("c", PassPhase::Pre, true),
            pass("d", PassPhase::Post, true),
        ];
        let runner = RecordingRunner::new().fail_program("c");

        let err = Pipeline::new(manifest, args(&["."]))
            .run(&runner)
            .unwrap_err();

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
    fn test_stage_failure_skips_compile_and_post() {
        let temp = TempDir::new().unwrap();
        let mut manifest = Manifest::default();
        manifest.style = StyleConfig {
            enabled: true,
            src_dir: temp.path().join("styles"),
            out_dir: temp.path().join("dist"),
            ..StyleConfig::default()
        };
        manifest.passes = vec![pass("notify", PassPhase::Post, true)];
        let runner = RecordingRunner::new().fail_program("sass");

        let err = Pipeline::new(manifest, args(&["."]))
            .run(&runner)
            .unwrap_err();

        assert_eq!(err.step(), "style");
        assert_eq!(runner.programs(), vec!["sass"]);
    }

    #[test]
    fn test_compile_failure_skips_post_passes() {
        let mut manifest = Manifest::default();
        manifest.passes = vec![
            pass("generate", PassPhase::Pre, true),
            pass("package", PassPhase::Post, true),
        ];
        let runner = RecordingRunner::new().fail_program("go");

        let err = Pipeline::new(manifest, args(&["."]))
            .run(&runner)
            .unwrap_err();

        assert!(matches!(err, PipelineError::Compile { .. }));
        assert_eq!(runner.programs(), vec!["generate", "go"]);
    }

    #[test]
    fn test_full_order() {
        let temp = TempDir::new().unwrap();
        let pages = temp.path().join("pages");
        fs::create_dir_all(&pages).unwrap();
        fs::write(pages.join("index.php"), "").unwrap();

        let manifest = Manifest::from_str(&format!(
            r#"
            [[passes]]
            name = "post"
            phase = "post"
            command = "echo"
            enabled = true

            [[passes]]
            name = "pre"
            phase = "pre"
            command = "true"
            enabled = true

            [transpile]
            enabled = true
            src_dir = '{root}/ts'
            out_dir = '{root}/js'

            [style]
            enabled = true
            src_dir = '{root}/scss'
            out_dir = '{root}/css'

            [convert]
            enabled = true
            src_dirs = ['{root}/pages']
            "#,
            root = temp.path().display()
        ))
        .unwrap();
        let runner = RecordingRunner::new();
        let (plugin, events) = RecordingPlugin::new();

        let summary = Pipeline::new(manifest, args(&["."]))
            .plugin(plugin)
            .run(&runner)
            .unwrap();

        assert_eq!(
            runner.programs(),
            vec!["true", "tsc", "sass", "php", "go", "echo"]
        );
        let steps: Vec<_> = summary.steps.iter().map(|s| s.step).collect();
        assert_eq!(
            steps,
            vec![
                "pre-passes",
                "transpile",
                "style",
                "convert",
                "compile",
                "post-passes"
            ]
        );
        assert!(pages.join("index.html").exists());

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 12);
        assert_eq!(events[0], "before:pre-passes");
        assert_eq!(events[1], "after:pre-passes");
        assert_eq!(events[11], "after:post-passes");
    }

    #[test]
    fn test_disabled_steps_skip_plugin_hooks() {
        let (plugin, events) = RecordingPlugin::new();
        let runner = RecordingRunner::new();

        Pipeline::new(Manifest::default(), args(&["."]))
            .plugin(plugin)
            .run(&runner)
            .unwrap();

        assert_eq!(
            *events.lock().unwrap(),
            vec!["before:compile".to_string(), "after:compile".to_string()]
        );
    }

    #[test]
    fn test_plugin_error_aborts_run() {
        struct Veto;

        impl Plugin for Veto {
            fn name(&self) -> &'static str {
                "veto"
            }

            fn on_before_step(&self, _step: &str, _ctx: &RunContext<'_>) -> Result<(), PipelineError> {
                Err(PipelineError::Stage {
                    stage: "veto",
                    source: StageError::MissingPath { field: "veto" },
                })
            }
        }

        let runner = RecordingRunner::new();
        let result = Pipeline::new(Manifest::default(), args(&["."]))
            .plugin(Veto)
            .run(&runner);

        assert_eq!(result.unwrap_err().step(), "veto");
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_invalid_manifest_spawns_nothing() {
        let manifest = Manifest::from_str(
            r#"
            [[passes]]
            name = "pre"
            phase = "pre"
            command = "true"
            enabled = true

            [transpile]
            enabled = true
            "#,
        )
        .unwrap();
        let runner = RecordingRunner::new();

        let err = Pipeline::new(manifest, args(&["."]))
            .run(&runner)
            .unwrap_err();

        match err {
            PipelineError::Invalid { diagnostics } => assert_eq!(diagnostics.len(), 2),
            other => panic!("expected invalid error, got {:?}", other),
        }
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_custom_lint_blocks_run() {
        struct NoGotip;

        impl Lint for NoGotip {
            fn name(&self) -> &'static str {
                "no-gotip"
            }

            fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
                if manifest.compiler.path == "gotip" {
                    diagnostics.push(Diagnostic::error(self.name(), "gotip is not allowed"));
                }
            }
        }

        let mut manifest = Manifest::default();
        manifest.compiler.path = "gotip".to_string();
        let runner = RecordingRunner::new();

        let err = Pipeline::new(manifest, args(&["."]))
            .lint(NoGotip)
            .run(&runner)
            .unwrap_err();

        match err {
            PipelineError::Invalid { diagnostics } => {
                assert_eq!(diagnostics.len(), 1);
                assert_eq!(diagnostics[0].lint, "no-gotip");
            }
            other => panic!("expected invalid error, got {:?}", other),
        }
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_warnings_reach_summary() {
        let mut manifest = Manifest::default();
        manifest.compiler.extensions = args(&["warp-drive"]);
        let runner = RecordingRunner::new();

        let summary = Pipeline::new(manifest, args(&["."])).run(&runner).unwrap();

        assert_eq!(summary.warnings.len(), 1);
        assert_eq!(summary.warnings[0].lint, "unknown-extension");
    }

    #[test]
    fn test_env_overlay_reaches_every_process() {
        let mut manifest = Manifest::default();
        manifest.env.insert("CGO_ENABLED", "0");
        manifest.passes = vec![pass("generate", PassPhase::Pre, true)];
        let runner = RecordingRunner::new();

        Pipeline::new(manifest, args(&["."])).run(&runner).unwrap();

        let envs = runner.envs();
        assert_eq!(envs.len(), 2);
        assert!(envs.iter().all(|e| e.get("CGO_ENABLED") == Some("0")));
    }

    #[test]
    fn test_plan_spawns_nothing() {
        let mut manifest = Manifest::default();
        manifest.compiler.default_flags = args(&["-trimpath"]);
        manifest.passes = vec![pass("vet", PassPhase::Post, true)];

        let plan = Pipeline::new(manifest, args(&["./cmd/app"]))
            .plan()
            .unwrap();

        assert_eq!(plan.steps.len(), 6);
        assert_eq!(plan.invocation_count(), 2);
        let enabled: Vec<_> = plan.enabled_steps().map(|s| s.name).collect();
        assert_eq!(enabled, vec!["compile", "post-passes"]);
        assert_eq!(
            plan.steps[4].invocations[0].to_string(),
            "go build -trimpath ./cmd/app"
        );
    }
}
