use std::fs::{self, File};
use std::path::Path;

use crate::error::IoError;

/// Fails unless `path` is a regular file the current process can open.
pub fn check_package(path: &Path) -> Result<(), IoError> {
    let metadata = fs::metadata(path).map_err(|e| IoError::from_io(path, e))?;
    if !metadata.is_file() {
        return Err(IoError::not_a_file(path));
    }

    File::open(path).map_err(|e| IoError::from_io(path, e))?;
    Ok(())
}
