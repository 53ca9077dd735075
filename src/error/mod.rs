mod config;
mod container;
mod io;
mod metadata;

pub use config::ConfigError;
pub use container::ContainerError;
pub use io::IoError;
pub use metadata::MetadataError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    UnreadablePackage(#[from] IoError),

    #[error(transparent)]
    ContainerExtractionFailed(#[from] ContainerError),

    #[error(transparent)]
    MalformedMetadata(#[from] MetadataError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
