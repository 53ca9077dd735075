//! Test suite loading: walks a class metadata container and turns annotated
//! test methods into [`TestCaseEvent`](crate::model::TestCaseEvent)s.

pub mod config;
mod package;
pub mod resolver;
pub mod suite;

pub use config::{AnnotationNames, LoaderConfig};
pub use package::check_package;
pub use resolver::{AnnotationResolver, Element, MethodModifiers};
pub use suite::{load_test_suite, TestSuiteLoader};
