//! Core primitives for the Stagehand build orchestrator.
//!
//! This crate provides the leaf pieces every pipeline step is built on:
//! spawning external tools with an environment overlay, and the small
//! filesystem helpers the auxiliary stages need.

mod env;
mod file;
mod process;

// Environment overlay
pub use env::EnvOverlay;
// File operations
pub use file::{File, FileRules, Overwrite, WriteResult, ensure_dir, write_file};
// Process execution
pub use process::{Invocation, ProcessError, ProcessRunner, SystemRunner};
