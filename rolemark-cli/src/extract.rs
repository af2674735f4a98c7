//! Writing extracted files to disk
//!
//! File names come straight from model output, so every name is checked before anything
//! is written: only plain relative paths are accepted, and nothing may climb out of the
//! output directory.

use crate::errors::CliError;
use rolemark_parser::ExtractedFile;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Resolve `name` under `out_dir`, rejecting absolute paths and `..` components
pub fn safe_destination(out_dir: &Path, name: &str) -> Result<PathBuf, CliError> {
    let relative = Path::new(name);
    let mut has_name = false;
    for component in relative.components() {
        match component {
            Component::Normal(_) => has_name = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(CliError::UnsafePath(name.to_string()));
            }
        }
    }
    if !has_name {
        return Err(CliError::UnsafePath(name.to_string()));
    }
    Ok(out_dir.join(relative))
}

/// Write every file under `out_dir`; returns the written paths in order.
/// All names are checked before the first write.
pub fn write_files(out_dir: &Path, files: &[ExtractedFile]) -> Result<Vec<PathBuf>, CliError> {
    let destinations = files
        .iter()
        .map(|file| safe_destination(out_dir, &file.name))
        .collect::<Result<Vec<_>, _>>()?;

    for (file, path) in files.iter().zip(&destinations) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| CliError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, &file.content).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(bytes = file.content.len(), path = %path.display(), "wrote file");
    }
    info!(count = destinations.len(), dir = %out_dir.display(), "extracted files");
    Ok(destinations)
}
