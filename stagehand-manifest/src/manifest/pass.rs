use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// When a pass runs relative to the primary compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PassPhase {
    /// Before the auxiliary stages and the primary compilation
    Pre,
    /// After a successful primary compilation
    Post,
}

impl PassPhase {
    /// Returns the phase identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PassPhase::Pre => "pre",
            PassPhase::Post => "post",
        }
    }
}

impl fmt::Display for PassPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PassPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pre" => Ok(PassPhase::Pre),
            "post" => Ok(PassPhase::Post),
            _ => Err(format!("unknown pass phase '{}', expected 'pre' or 'post'", s)),
        }
    }
}

/// A named external command run before or after the primary compilation.
///
/// Names identify a pass in logs and errors; they are not required to be
/// unique.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pass {
    pub name: String,

    pub phase: PassPhase,

    /// Executable to run
    pub command: String,

    #[serde(default)]
    pub args: Vec<String>,

    /// Passes are opt-in: a pass without `enabled = true` never runs
    #[serde(default)]
    pub enabled: bool,
}
