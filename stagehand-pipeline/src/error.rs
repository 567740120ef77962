//! Pipeline error types.

use std::{io, path::PathBuf};

use stagehand_core::ProcessError;
use stagehand_manifest::PassPhase;
use thiserror::Error;

use crate::Diagnostic;

/// Failure inside one auxiliary stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("`{field}` must be set when the stage is enabled")]
    MissingPath { field: &'static str },

    #[error("failed to create output directory '{}'", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error("failed to convert '{}'", path.display())]
    Convert {
        path: PathBuf,
        #[source]
        source: ProcessError,
    },

    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk '{}'", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Failure of a pipeline run, tagged with the step that failed.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configuration has {} error(s)", .diagnostics.len())]
    Invalid { diagnostics: Vec<Diagnostic> },

    #[error("{phase}-pass '{name}' failed")]
    Pass {
        phase: PassPhase,
        name: String,
        #[source]
        source: ProcessError,
    },

    #[error("{stage} stage failed")]
    Stage {
        stage: &'static str,
        #[source]
        source: StageError,
    },

    #[error("primary compilation failed")]
    Compile {
        #[source]
        source: ProcessError,
    },
}

impl PipelineError {
    /// Name of the pipeline step that failed.
    pub fn step(&self) -> &'static str {
        match self {
            PipelineError::Invalid { .. } => "validate",
            PipelineError::Pass {
                phase: PassPhase::Pre,
                ..
            } => "pre-passes",
            PipelineError::Pass {
                phase: PassPhase::Post,
                ..
            } => "post-passes",
            PipelineError::Stage { stage, .. } => *stage,
            PipelineError::Compile { .. } => "compile",
        }
    }
}
