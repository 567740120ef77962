use serde::Deserialize;

/// Primary compiler settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    /// Executable for the primary compilation
    pub path: String,

    /// Flags injected unless the caller already passes the same flag
    pub default_flags: Vec<String>,

    /// Extension tokens, each mapped to a fixed compiler flag
    pub extensions: Vec<String>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            path: "go".to_string(),
            default_flags: Vec::new(),
            extensions: Vec::new(),
        }
    }
}
