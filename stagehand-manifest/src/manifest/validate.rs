//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use super::Pass;
use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy, so errors can point at the offending
/// section of the file.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "stagehand.toml");
/// ctx.push("passes").validate_pass(0, &pass)?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["convert"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Check that a pass can be executed at all.
    pub fn validate_pass(&self, index: usize, pass: &Pass) -> Result<()> {
        if pass.name.trim().is_empty() {
            return Err(self.source.validation_error(
                format!("pass #{} in '{}' has an empty name", index + 1, self.path_string()),
                find_array_table_span(self.source.src(), &self.path_string(), index),
            ));
        }

        if pass.command.trim().is_empty() {
            return Err(self.source.validation_error(
                format!("pass '{}' has no command", pass.name),
                find_quoted_span(self.source.src(), &pass.name),
            ));
        }

        Ok(())
    }

    /// Check a file extension setting (`scss`, not `.scss`).
    pub fn validate_extension(&self, key: &str, value: &str) -> Result<()> {
        let reason = if value.is_empty() {
            "cannot be empty"
        } else if value.starts_with('.') {
            "must not start with a dot"
        } else if value.contains(['/', '\\', '*']) {
            "must be a plain file extension"
        } else {
            return Ok(());
        };

        Err(self.source.validation_error(
            format!("'{}.{}' {}", self.path_string(), key, reason),
            find_key_span(self.source.src(), key),
        ))
    }

    /// Check that converted files cannot land on their own sources.
    pub fn validate_distinct_extensions(&self, source: &str, output: &str) -> Result<()> {
        if source != output {
            return Ok(());
        }

        Err(self.source.validation_error(
            format!(
                "'{}.output_extension' must differ from 'source_extension' ('{}')",
                self.path_string(),
                output
            ),
            find_key_span(self.source.src(), "output_extension"),
        ))
    }
}

/// Find the span of a quoted string value such as `name = "lint"`.
pub(crate) fn find_quoted_span(src: &str, value: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    src.find(&quoted)
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}

/// Find the span of the `index`-th `[[table]]` header.
pub(crate) fn find_array_table_span(src: &str, table: &str, index: usize) -> Option<SourceSpan> {
    let header = format!("[[{}]]", table);
    src.match_indices(&header)
        .nth(index)
        .map(|(pos, _)| SourceSpan::from((pos, header.len())))
}

/// Find the span of a `key =` assignment.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    src.lines()
        .scan(0usize, |offset, line| {
            let start = *offset;
            *offset += line.len() + 1;
            Some((start, line))
        })
        .find_map(|(start, line)| {
            let trimmed = line.trim_start();
            let rest = trimmed.strip_prefix(key)?;
            if rest.trim_start().starts_with('=') {
                let indent = line.len() - trimmed.len();
                Some(SourceSpan::from((start + indent, key.len())))
            } else {
                None
            }
        })
}
