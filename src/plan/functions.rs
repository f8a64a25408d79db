//! Function folder discovery.
//!
//! Each directory under the functions dir is one function. Hidden
//! directories and plain files are ignored.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// List function folder names under `dir`, sorted.
///
/// A missing directory yields an empty list.
pub fn discover_functions(dir: &Path) -> Result<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("Functions directory {} not found", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut folders = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        folders.push(name);
    }

    folders.sort();
    tracing::debug!("Discovered {} function(s) in {}", folders.len(), dir.display());
    Ok(folders)
}
