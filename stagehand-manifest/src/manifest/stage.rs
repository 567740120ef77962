//! Settings for the auxiliary build stages.

use std::path::PathBuf;

use serde::Deserialize;

/// Transpile stage: `tool [options...] --outDir <out_dir> <src_dir>`
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranspileConfig {
    pub enabled: bool,
    pub tool: String,
    pub src_dir: PathBuf,
    pub out_dir: PathBuf,
    pub options: Vec<String>,
}

impl Default for TranspileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            tool: "tsc".to_string(),
            src_dir: PathBuf::new(),
            out_dir: PathBuf::new(),
            options: Vec::new(),
        }
    }
}

/// Style-sheet stage: `tool [options...] <src_dir>/*.<extension> <out_dir>`
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    pub enabled: bool,
    pub tool: String,
    pub src_dir: PathBuf,
    pub out_dir: PathBuf,
    pub options: Vec<String>,
    /// Source file extension, without the leading dot
    pub extension: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            tool: "sass".to_string(),
            src_dir: PathBuf::new(),
            out_dir: PathBuf::new(),
            options: Vec::new(),
            extension: "scss".to_string(),
        }
    }
}

/// Per-file conversion stage.
///
/// Every file under `src_dirs` with `source_extension` is run through
/// `tool [options...] <file>` and its stdout is written next to it with
/// `output_extension`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    pub enabled: bool,
    pub tool: String,
    pub src_dirs: Vec<PathBuf>,
    pub options: Vec<String>,
    pub source_extension: String,
    pub output_extension: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            tool: "php".to_string(),
            src_dirs: Vec::new(),
            options: Vec::new(),
            source_extension: "php".to_string(),
            output_extension: "html".to_string(),
        }
    }
}
