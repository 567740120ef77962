//! Manifest types and parsing for stagehand.toml files.

mod compiler;
mod file;
mod output;
mod pass;
mod stage;
mod template;
mod validate;

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

pub use compiler::CompilerConfig;
pub use file::ManifestFile;
pub use output::OutputConfig;
pub use pass::{Pass, PassPhase};
use serde::Deserialize;
pub use stage::{ConvertConfig, StyleConfig, TranspileConfig};
use stagehand_core::EnvOverlay;
pub use template::STARTER_MANIFEST;
pub use validate::ParseContext;

use crate::{Error, Result, SourceContext};

/// File name looked up in the working directory.
pub const MANIFEST_FILE_NAME: &str = "stagehand.toml";

/// Root manifest for stagehand.toml
///
/// Every section is optional; missing values fall back to the defaults of
/// each section type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Primary compiler settings
    #[serde(default)]
    pub compiler: CompilerConfig,

    /// Extra environment variables for every spawned process
    #[serde(default)]
    pub env: EnvOverlay,

    /// Custom passes, in declaration order
    #[serde(default)]
    pub passes: Vec<Pass>,

    /// Transpile stage (TypeScript-style)
    #[serde(default)]
    pub transpile: TranspileConfig,

    /// Style-sheet stage (SCSS-style)
    #[serde(default)]
    pub style: StyleConfig,

    /// Per-file conversion stage (PHP-to-HTML-style)
    #[serde(default)]
    pub convert: ConvertConfig,

    /// Output and verbosity options
    #[serde(default)]
    pub output: OutputConfig,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, MANIFEST_FILE_NAME)
    }
}

impl Manifest {
    /// Parse a stagehand.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        ManifestFile::open(path).map(ManifestFile::into_manifest)
    }

    /// Parse a stagehand.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source = SourceContext::new(content, filename);
        let mut manifest: Self = toml::from_str(content).map_err(|e| source.parse_error(e))?;
        manifest.fill_empty_tools();
        manifest.validate(&ParseContext::new(content, filename))?;
        Ok(manifest)
    }

    /// Passes of the given phase, in declaration order.
    pub fn passes_for(&self, phase: PassPhase) -> impl Iterator<Item = &Pass> {
        self.passes.iter().filter(move |p| p.phase == phase)
    }

    /// Tool paths written as empty strings mean "use the default".
    fn fill_empty_tools(&mut self) {
        let defaults = Manifest::default();
        if self.compiler.path.is_empty() {
            self.compiler.path = defaults.compiler.path;
        }
        if self.transpile.tool.is_empty() {
            self.transpile.tool = defaults.transpile.tool;
        }
        if self.style.tool.is_empty() {
            self.style.tool = defaults.style.tool;
        }
        if self.convert.tool.is_empty() {
            self.convert.tool = defaults.convert.tool;
        }
    }

    fn validate(&self, ctx: &ParseContext) -> Result<()> {
        let passes = ctx.push("passes");
        for (index, pass) in self.passes.iter().enumerate() {
            passes.validate_pass(index, pass)?;
        }

        let convert = ctx.push("convert");
        convert.validate_extension("source_extension", &self.convert.source_extension)?;
        convert.validate_extension("output_extension", &self.convert.output_extension)?;
        convert.validate_distinct_extensions(
            &self.convert.source_extension,
            &self.convert.output_extension,
        )?;
        ctx.push("style")
            .validate_extension("extension", &self.style.extension)?;

        Ok(())
    }
}

/// Resolve the configuration path used when none is given explicitly.
///
/// Prefers `./stagehand.toml`, then `$HOME/.stagehand/config.toml`. The
/// returned path may not exist.
pub fn default_path() -> PathBuf {
    let local = PathBuf::from(MANIFEST_FILE_NAME);
    if local.exists() {
        return local;
    }

    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".stagehand").join("config.toml"),
        None => local,
    }
}
