//! External process execution.

use std::{
    fmt, io,
    process::{Command, ExitStatus, Stdio},
};

use serde::Serialize;
use thiserror::Error;

use crate::EnvOverlay;

/// A program and its argument vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments in order.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arg_list(&self) -> &[String] {
        &self.args
    }

    fn command(&self, env: &EnvOverlay) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        env.apply(&mut cmd);
        cmd
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Failure to run an external process.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to start `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` {}", describe_exit(.code))]
    Exit { program: String, code: Option<i32> },
}

impl ProcessError {
    /// The program that failed.
    pub fn program(&self) -> &str {
        match self {
            ProcessError::Spawn { program, .. } | ProcessError::Exit { program, .. } => program,
        }
    }

    /// Exit code of the process, if it ran and exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ProcessError::Exit { code, .. } => *code,
            ProcessError::Spawn { .. } => None,
        }
    }

    fn spawn(invocation: &Invocation, source: io::Error) -> Self {
        ProcessError::Spawn {
            program: invocation.program.clone(),
            source,
        }
    }

    fn check(invocation: &Invocation, status: ExitStatus) -> Result<(), Self> {
        if status.success() {
            Ok(())
        } else {
            Err(ProcessError::Exit {
                program: invocation.program.clone(),
                code: status.code(),
            })
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

/// Runs external tools on behalf of pipeline steps.
///
/// Calls block until the process exits. No timeout is applied.
pub trait ProcessRunner {
    /// Run a process with stdout and stderr forwarded to ours.
    fn run(&self, invocation: &Invocation, env: &EnvOverlay) -> Result<(), ProcessError>;

    /// Run a process and return everything it wrote to stdout.
    ///
    /// Stderr is still forwarded so the tool's own diagnostics stay visible.
    fn capture(&self, invocation: &Invocation, env: &EnvOverlay) -> Result<Vec<u8>, ProcessError>;
}

/// [`ProcessRunner`] backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation, env: &EnvOverlay) -> Result<(), ProcessError> {
        tracing::trace!(command = %invocation, "spawning");
        let status = invocation
            .command(env)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ProcessError::spawn(invocation, e))?;

        ProcessError::check(invocation, status)
    }

    fn capture(&self, invocation: &Invocation, env: &EnvOverlay) -> Result<Vec<u8>, ProcessError> {
        tracing::trace!(command = %invocation, "spawning (capturing stdout)");
        let output = invocation
            .command(env)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| ProcessError::spawn(invocation, e))?;

        ProcessError::check(invocation, output.status)?;
        Ok(output.stdout)
    }
}
