//! Built-in lints.

mod duplicate_pass;
mod empty_convert;
mod stage_paths;
mod unknown_extension;

pub use duplicate_pass::DuplicatePassLint;
pub use empty_convert::EmptyConvertLint;
pub use stage_paths::StagePathsLint;
pub use unknown_extension::UnknownExtensionLint;
