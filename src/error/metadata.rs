use thiserror::Error;

/// Annotation metadata that cannot be decoded into a recognized modifier.
///
/// `element` names the annotated class (`com.example.FooTest`) or method
/// (`com.example.FooTest#testBar`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    #[error("malformed annotation {annotation} on {element}: expected {expected} payload, found {found}")]
    UnexpectedShape {
        element: String,
        annotation: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("annotation {annotation} declared more than once on {element}")]
    DuplicateAnnotation { element: String, annotation: String },

    #[error("empty {kind} name in {context}")]
    EmptyName { kind: &'static str, context: String },
}

impl MetadataError {
    pub fn unexpected_shape(
        element: impl Into<String>,
        annotation: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::UnexpectedShape {
            element: element.into(),
            annotation: annotation.into(),
            expected,
            found,
        }
    }

    pub fn duplicate_annotation(element: impl Into<String>, annotation: impl Into<String>) -> Self {
        Self::DuplicateAnnotation {
            element: element.into(),
            annotation: annotation.into(),
        }
    }

    pub fn empty_name(kind: &'static str, context: impl Into<String>) -> Self {
        Self::EmptyName {
            kind,
            context: context.into(),
        }
    }
}
