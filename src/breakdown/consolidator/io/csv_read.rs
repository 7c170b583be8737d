use std::fs;
use std::path::Path;

use crate::breakdown::consolidator::error::{Result, ToolError};
use crate::breakdown::consolidator::model::RawTable;

/// Reads a breakdown file into its raw lines.
pub fn read_table(path: &Path) -> Result<RawTable> {
    ensure_exists(path)?;
    load(path)
}

/// Reads every path in order. All paths are checked for existence before any
/// file is read, and the first unreadable file fails the whole call.
pub fn read_tables<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<RawTable>> {
    for path in paths {
        ensure_exists(path.as_ref())?;
    }
    paths.iter().map(|path| load(path.as_ref())).collect()
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(ToolError::MissingInput(path.to_path_buf()))
    }
}

fn load(path: &Path) -> Result<RawTable> {
    let text = fs::read_to_string(path)?;
    Ok(RawTable::from_text(text.strip_prefix('\u{feff}').unwrap_or(&text)))
}
