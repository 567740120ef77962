use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use stagehand_core::{Invocation, write_file};
use stagehand_manifest::ConvertConfig;
use walkdir::WalkDir;

use super::path_arg;
use crate::{PipelineError, RunContext, StageError, Step};

/// Per-file conversion: each matching source file is run through the tool
/// and its stdout becomes a sibling file with the output extension.
///
/// The first failing file aborts the whole stage. Files converted before
/// the failure stay on disk.
pub struct ConvertStep<'a> {
    config: &'a ConvertConfig,
}

impl<'a> ConvertStep<'a> {
    pub fn new(config: &'a ConvertConfig) -> Self {
        Self { config }
    }

    /// Output path for a source file, e.g. `pages/a.php` → `pages/a.html`.
    ///
    /// Only the configured source suffix is replaced, so `page.tpl.php`
    /// with source extension `tpl.php` becomes `page.html`.
    pub fn output_path(&self, source: &Path) -> PathBuf {
        let name = file_name(source);
        let stem = name.strip_suffix(&self.source_suffix()).unwrap_or(name);
        source.with_file_name(format!("{}.{}", stem, self.config.output_extension))
    }

    fn source_suffix(&self) -> String {
        format!(".{}", self.config.source_extension)
    }

    fn invocation(&self, source: &Path) -> Invocation {
        Invocation::new(&self.config.tool)
            .args(&self.config.options)
            .arg(path_arg(source))
    }

    fn is_source(&self, path: &Path) -> bool {
        file_name(path).ends_with(&self.source_suffix())
    }

    /// Matching files under one source directory, in file-name order.
    fn sources(&self, root: &Path) -> impl Iterator<Item = Result<PathBuf, StageError>> + '_ {
        let root = root.to_path_buf();
        WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) if !entry.file_type().is_dir() && self.is_source(entry.path()) => {
                    Some(Ok(entry.into_path()))
                }
                Ok(_) => None,
                Err(source) => Some(Err(StageError::Walk {
                    root: root.clone(),
                    source,
                })),
            })
    }

    fn convert_file(&self, source: &Path, ctx: &mut RunContext<'_>) -> Result<(), StageError> {
        let output = self.output_path(source);
        tracing::info!("converting {} to {}", source.display(), output.display());

        let bytes = ctx
            .capture(&self.invocation(source))
            .map_err(|e| StageError::Convert {
                path: source.to_path_buf(),
                source: e,
            })?;

        write_file(&output, bytes).map_err(|e| StageError::Write {
            path: output.clone(),
            source: e,
        })
    }

    fn execute(&self, ctx: &mut RunContext<'_>) -> Result<(), StageError> {
        for root in &self.config.src_dirs {
            for source in self.sources(root) {
                self.convert_file(&source?, ctx)?;
            }
        }
        Ok(())
    }

    fn wrap(source: StageError) -> PipelineError {
        PipelineError::Stage {
            stage: "convert",
            source,
        }
    }
}

/// Non-UTF-8 names never match a configured extension.
fn file_name(path: &Path) -> &str {
    path.file_name().and_then(OsStr::to_str).unwrap_or_default()
}

impl Step for ConvertStep<'_> {
    fn name(&self) -> &'static str {
        "convert"
    }

    fn description(&self) -> &'static str {
        "Convert source files into sibling output files"
    }

    fn enabled(&self) -> bool {
        self.config.enabled
    }

    fn run(&self, ctx: &mut RunContext<'_>) -> Result<(), PipelineError> {
        tracing::info!(
            "converting .{} files to .{}",
            self.config.source_extension,
            self.config.output_extension
        );
        self.execute(ctx).map_err(Self::wrap)
    }

    fn plan(&self) -> Result<Vec<Invocation>, PipelineError> {
        let mut invocations = Vec::new();
        for root in &self.config.src_dirs {
            for source in self.sources(root) {
                let source = source.map_err(Self::wrap)?;
                invocations.push(self.invocation(&source));
            }
        }
        Ok(invocations)
    }
}
