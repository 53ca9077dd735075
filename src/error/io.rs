use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("package not found: {path}")]
    PackageNotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("package is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    #[error("failed to read package '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl IoError {
    pub fn package_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PackageNotFound { path: path.into() }
    }

    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::NotAFile { path: path.into() }
    }

    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Classifies a failed filesystem call on `path` by its error kind.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::package_not_found(path),
            std::io::ErrorKind::PermissionDenied => Self::permission_denied(path),
            _ => Self::read_error(path, source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_not_found_display() {
        let err = IoError::package_not_found("/path/to/app-test.apk");
        assert_eq!(err.to_string(), "package not found: /path/to/app-test.apk");
    }

    #[test]
    fn test_not_a_file_display() {
        let err = IoError::not_a_file("/path/to/dir");
        assert_eq!(
            err.to_string(),
            "package is not a regular file: /path/to/dir"
        );
    }

    #[test]
    fn test_from_io_classifies_kind() {
        let not_found = std::io::Error::from(std::io::ErrorKind::NotFound);
        assert!(matches!(
            IoError::from_io("a.apk", not_found),
            IoError::PackageNotFound { .. }
        ));

        let denied = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        assert!(matches!(
            IoError::from_io("a.apk", denied),
            IoError::PermissionDenied { .. }
        ));

        let other = std::io::Error::other("disk on fire");
        assert!(matches!(
            IoError::from_io("a.apk", other),
            IoError::ReadError { .. }
        ));
    }
}
