//! Fork Suite
//!
//! Discovers the test cases of an Android instrumentation package from its
//! class metadata: test classes are picked by a pluggable matcher, test
//! methods by annotation, and each becomes a [`TestCaseEvent`] carrying its
//! ignore flag, permissions to revoke and properties.
pub mod classifier;
pub mod cli;
pub mod container;
pub mod error;
pub mod loader;
pub mod logging;
pub mod model;
pub mod output;
pub mod utils;

pub use classifier::TestClassMatcher;
pub use container::ContainerProvider;
pub use error::{Error, Result};
pub use loader::{load_test_suite, TestSuiteLoader};
pub use model::TestCaseEvent;
