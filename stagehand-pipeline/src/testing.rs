//! Test utilities for pipeline runs.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::cell::RefCell;

use stagehand_core::{EnvOverlay, Invocation, ProcessError, ProcessRunner};

type Predicate = Box<dyn Fn(&Invocation) -> bool>;

/// A [`ProcessRunner`] that records invocations instead of spawning them.
///
/// Every call succeeds unless a failure rule matches, in which case it
/// returns [`ProcessError::Exit`] with status 1. Captured output is
/// `converted <last argument>` so written files can be told apart.
#[derive(Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<(Invocation, EnvOverlay)>>,
    failures: Vec<Predicate>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every invocation of `program`.
    pub fn fail_program(self, program: &str) -> Self {
        let program = program.to_string();
        self.fail_when(move |inv| inv.program() == program)
    }

    /// Fail every invocation whose last argument ends with `suffix`.
    pub fn fail_last_arg(self, suffix: &str) -> Self {
        let suffix = suffix.to_string();
        self.fail_when(move |inv| {
            inv.arg_list()
                .last()
                .is_some_and(|arg| arg.ends_with(&suffix))
        })
    }

    /// Fail every invocation matching `predicate`.
    pub fn fail_when(mut self, predicate: impl Fn(&Invocation) -> bool + 'static) -> Self {
        self.failures.push(Box::new(predicate));
        self
    }

    /// All recorded invocations, in call order.
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().iter().map(|(inv, _)| inv.clone()).collect()
    }

    /// Programs of all recorded invocations, in call order.
    pub fn programs(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|(inv, _)| inv.program().to_string())
            .collect()
    }

    /// Environment overlays passed with each invocation.
    pub fn envs(&self) -> Vec<EnvOverlay> {
        self.calls.borrow().iter().map(|(_, env)| env.clone()).collect()
    }

    fn record(&self, invocation: &Invocation, env: &EnvOverlay) -> Result<(), ProcessError> {
        self.calls
            .borrow_mut()
            .push((invocation.clone(), env.clone()));

        if self.failures.iter().any(|fails| fails(invocation)) {
            return Err(ProcessError::Exit {
                program: invocation.program().to_string(),
                code: Some(1),
            });
        }
        Ok(())
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation, env: &EnvOverlay) -> Result<(), ProcessError> {
        self.record(invocation, env)
    }

    fn capture(&self, invocation: &Invocation, env: &EnvOverlay) -> Result<Vec<u8>, ProcessError> {
        self.record(invocation, env)?;
        let last = invocation.arg_list().last().cloned().unwrap_or_default();
        Ok(format!("converted {}", last).into_bytes())
    }
}
