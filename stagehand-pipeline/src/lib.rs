//! Pipeline sequencing and command composition.
//!
//! A [`Pipeline`] turns a [`Manifest`](stagehand_manifest::Manifest) and the
//! caller's compiler arguments into an ordered run:
//!
//! ```text
//! validate → pre-passes → transpile → style → convert → compile → post-passes
//! ```
//!
//! Every step runs its external tools through a
//! [`ProcessRunner`](stagehand_core::ProcessRunner), one at a time. The first
//! failure aborts the run and is returned as a [`PipelineError`] naming the
//! step, pass or file that failed.
//!
//! # Modules
//!
//! - [`flags`] - primary compiler argument composition
//! - [`lint`] - static checks over a manifest
//! - [`steps`] - pass runner and auxiliary stage runners
//! - [`testing`] - recording process runner (feature-gated)

mod context;
mod diagnostic;
mod error;
pub mod flags;
pub mod lint;
mod plan;
mod plugin;
mod runner;
mod step;
pub mod steps;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use context::{RunContext, StepRecord};
pub use diagnostic::{Diagnostic, Severity};
pub use error::{PipelineError, StageError};
pub use plan::{Plan, PlannedStep};
pub use plugin::Plugin;
pub use runner::{Pipeline, RunSummary};
pub use step::Step;
