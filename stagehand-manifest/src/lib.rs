//! Configuration model and `stagehand.toml` loading.
//!
//! The pipeline crates never read files themselves; they are handed a
//! finished [`Manifest`] built here.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    CompilerConfig, ConvertConfig, MANIFEST_FILE_NAME, Manifest, ManifestFile, OutputConfig,
    ParseContext, Pass, PassPhase, STARTER_MANIFEST, StyleConfig, TranspileConfig, default_path,
};
