pub mod snapshot;

pub use snapshot::{SnapshotProvider, SNAPSHOT_VERSION};

use std::path::Path;

use crate::error::ContainerError;
use crate::model::Container;

/// Produces the class metadata container for a compiled test package.
///
/// The returned container is owned by the caller; providers must not hand
/// out handles that outlive the call.
pub trait ContainerProvider: Send + Sync {
    fn extract(&self, package: &Path) -> Result<Container, ContainerError>;
}

impl<T: ContainerProvider + ?Sized> ContainerProvider for &T {
    fn extract(&self, package: &Path) -> Result<Container, ContainerError> {
        (**self).extract(package)
    }
}

impl<T: ContainerProvider + ?Sized> ContainerProvider for Box<T> {
    fn extract(&self, package: &Path) -> Result<Container, ContainerError> {
        (**self).extract(package)
    }
}
