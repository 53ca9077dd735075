//! Metadata-shaped view of a compiled test package and the events the
//! loader derives from it.

mod annotation;
mod class;
mod event;

pub use annotation::{Annotation, AnnotationValue};
pub use class::{ClassDefinition, Container, MethodDefinition};
pub use event::TestCaseEvent;
