//! Repository list file
//!
//! The list file is the hand-off between `list` and the batch commands: one
//! repository name per line, rewritten wholesale on every save.

use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::error::Result;

/// Default list file name, relative to the working directory
pub const DEFAULT_LIST_FILE: &str = "repositories.txt";

/// Write `names` to `path`, one per line, replacing any previous content.
pub fn save<S: AsRef<str>>(names: &[S], path: &Path) -> Result<()> {
    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    for name in names {
        writeln!(writer, "{}", name.as_ref())?;
    }
    writer.flush()?;
    Ok(())
}

/// Read names from `path`.
///
/// Returns `Ok(None)` when the file does not exist. Lines are trimmed and
/// blank lines dropped.
pub fn load(path: &Path) -> Result<Option<Vec<String>>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let names = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    Ok(Some(names))
}
