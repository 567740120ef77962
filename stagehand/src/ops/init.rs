//! Init operation - starter configuration.

use std::{io, path::Path};

use stagehand_core::{File, FileRules, Overwrite};
use stagehand_manifest::{MANIFEST_FILE_NAME, STARTER_MANIFEST};

use crate::reports::InitReport;

/// Write a starter `stagehand.toml` into `dir`.
///
/// An existing file is left alone unless `force` is set.
pub fn init(dir: &Path, force: bool) -> io::Result<InitReport> {
    let overwrite = if force {
        Overwrite::Always
    } else {
        Overwrite::IfMissing
    };

    let file = File::new(dir.join(MANIFEST_FILE_NAME), STARTER_MANIFEST)
        .with_rules(FileRules { overwrite });
    let result = file.write()?;

    Ok(InitReport {
        path: file.path().to_path_buf(),
        result,
    })
}
