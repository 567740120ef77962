//! Run context passed through pipeline steps.

use std::time::Duration;

use stagehand_core::{EnvOverlay, Invocation, ProcessError, ProcessRunner};

/// A step that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// Step name, e.g. `"transpile"`.
    pub step: &'static str,
    /// Number of processes the step spawned.
    pub invocations: usize,
    /// Wall-clock time spent in the step.
    pub elapsed: Duration,
}

/// State shared by every step of one pipeline run.
///
/// All processes go through [`RunContext::run`] or [`RunContext::capture`],
/// which apply the environment overlay and count invocations.
pub struct RunContext<'a> {
    runner: &'a dyn ProcessRunner,
    env: &'a EnvOverlay,
    invocations: usize,
    /// Steps completed so far, in execution order.
    pub completed: Vec<StepRecord>,
}

impl<'a> RunContext<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, env: &'a EnvOverlay) -> Self {
        Self {
            runner,
            env,
            invocations: 0,
            completed: Vec::new(),
        }
    }

    /// Total processes spawned so far in this run.
    pub fn invocations(&self) -> usize {
        self.invocations
    }

    /// Run a process with its output streamed to ours.
    pub fn run(&mut self, invocation: &Invocation) -> Result<(), ProcessError> {
        tracing::info!("executing: {}", invocation);
        self.invocations += 1;
        self.runner.run(invocation, self.env)
    }

    /// Run a process and collect its stdout.
    pub fn capture(&mut self, invocation: &Invocation) -> Result<Vec<u8>, ProcessError> {
        tracing::info!("executing: {}", invocation);
        self.invocations += 1;
        self.runner.capture(invocation, self.env)
    }

    /// Names of the completed steps, in order.
    pub fn completed_steps(&self) -> Vec<&'static str> {
        self.completed.iter().map(|r| r.step).collect()
    }
}
