//! Built-in pipeline steps.
//!
//! In execution order:
//!
//! - [`PassStep`] (pre) - configured pre-passes
//! - [`TranspileStep`] - `tsc`-style directory transpile
//! - [`StyleStep`] - `sass`-style style-sheet compile
//! - [`ConvertStep`] - per-file conversion (`.php` → `.html`)
//! - [`CompileStep`] - the primary compiler
//! - [`PassStep`] (post) - configured post-passes

mod compile;
mod convert;
mod passes;
mod style;
mod transpile;

pub use compile::CompileStep;
pub use convert::ConvertStep;
pub use passes::{PassStep, run_passes};
pub use style::StyleStep;
pub use transpile::TranspileStep;

use std::path::Path;

use stagehand_core::ensure_dir;

use crate::StageError;

/// Fail when an enabled stage has no location configured for `field`.
fn require_path(path: &Path, field: &'static str) -> Result<(), StageError> {
    if path.as_os_str().is_empty() {
        Err(StageError::MissingPath { field })
    } else {
        Ok(())
    }
}

/// Create a stage output directory, parents included.
fn create_out_dir(path: &Path) -> Result<(), StageError> {
    ensure_dir(path).map_err(|source| StageError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
