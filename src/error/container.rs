use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("failed to extract class metadata from '{path}': {message}")]
    ExtractionFailed { path: PathBuf, message: String },

    #[error("unsupported snapshot format: {format} (expected json or yaml)")]
    UnsupportedFormat { format: String },

    #[error("unsupported snapshot version '{version}' in '{path}'")]
    UnsupportedVersion { path: PathBuf, version: String },
}

impl ContainerError {
    pub fn extraction_failed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ExtractionFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    pub fn unsupported_version(path: impl Into<PathBuf>, version: impl Into<String>) -> Self {
        Self::UnsupportedVersion {
            path: path.into(),
            version: version.into(),
        }
    }
}
