//! Configuration lookup for every command.

use std::path::{Path, PathBuf};

use stagehand_manifest::{Manifest, default_path};

/// A manifest together with where it came from.
#[derive(Debug)]
pub struct Loaded {
    pub manifest: Manifest,
    pub source: Source,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Parsed from this file.
    File(PathBuf),
    /// Nothing at this path; built-in defaults are in effect.
    Defaults(PathBuf),
}

impl Loaded {
    /// Log the defaults fallback, once logging is set up.
    pub fn report_fallback(&self) {
        if let Source::Defaults(path) = &self.source {
            tracing::warn!(
                "config file {} not found, using defaults",
                path.display()
            );
        }
    }

    /// Path that was looked up, whether or not it existed.
    pub fn path(&self) -> &Path {
        match &self.source {
            Source::File(path) | Source::Defaults(path) => path,
        }
    }
}

/// Load the manifest at `explicit`, or at the default location.
///
/// A missing file is not an error. Any other read or parse failure is.
pub fn load(explicit: Option<&Path>) -> stagehand_manifest::Result<Loaded> {
    let path = explicit.map_or_else(default_path, Path::to_path_buf);

    match Manifest::from_file(&path) {
        Ok(manifest) => Ok(Loaded {
            manifest,
            source: Source::File(path),
        }),
        Err(e) if e.is_not_found() => Ok(Loaded {
            manifest: Manifest::default(),
            source: Source::Defaults(path),
        }),
        Err(e) => Err(e),
    }
}
