//! Core operations.
//!
//! This module contains the business logic for stagehand commands,
//! separated from CLI argument parsing and output rendering.

pub mod build;
pub mod check;
pub mod init;
pub mod plan;

pub use build::build;
pub use check::check;
pub use init::init;
pub use plan::plan;
