/// Plaintext document helpers.
///
/// Everything the pipeline touches on disk is a whole UTF-8 `.txt` file: the notional machine
/// descriptions, the marking criteria, the evaluation form template and the evaluations the
/// model writes back. File handles never outlive the call that opened them.
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CommonError;

/// Extension used for every document the pipeline reads or writes.
pub const TEXT_EXTENSION: &str = ".txt";

/// List the `.txt` files directly inside `dir`.
///
/// Entries come back in whatever order the filesystem yields them. Subdirectories and
/// entries with non-UTF-8 names are ignored. A missing directory is an error, not an
/// empty listing.
pub fn list_text_files(dir: &Path) -> Result<Vec<PathBuf>, CommonError> {
    let list_err = |source| CommonError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if !name.ends_with(TEXT_EXTENSION) {
            continue;
        }
        if entry.file_type().map_err(list_err)?.is_dir() {
            continue;
        }
        files.push(entry.path());
    }
    Ok(files)
}

/// Read a whole UTF-8 file into a string.
pub fn read_text(path: &Path) -> Result<String, CommonError> {
    fs::read_to_string(path).map_err(|source| CommonError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Create or truncate `path` and write `content` to it.
pub fn write_text(path: &Path, content: &str) -> Result<(), CommonError> {
    fs::write(path, content).map_err(|source| CommonError::Write {
        path: path.to_path_buf(),
        source,
    })
}
