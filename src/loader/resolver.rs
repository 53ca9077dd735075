use std::collections::BTreeMap;
use std::fmt;

use super::AnnotationNames;
use crate::error::MetadataError;
use crate::model::{Annotation, AnnotationValue, ClassDefinition, MethodDefinition};

/// The class or method an annotation is attached to, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element<'a> {
    Class(&'a str),
    Method { class: &'a str, method: &'a str },
}

impl fmt::Display for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Class(class) => write!(f, "{class}"),
            Element::Method { class, method } => write!(f, "{class}#{method}"),
        }
    }
}

/// Method-level modifiers of a test method.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodModifiers {
    pub ignored: bool,
    pub permissions_to_revoke: Vec<String>,
    pub properties: BTreeMap<String, String>,
}

/// Decodes recognized annotations into modifiers. Holds no state beyond the
/// annotation names, so every call reads the definitions it is given.
#[derive(Debug, Clone, Copy)]
pub struct AnnotationResolver<'a> {
    names: &'a AnnotationNames,
}

impl<'a> AnnotationResolver<'a> {
    pub fn new(names: &'a AnnotationNames) -> Self {
        Self { names }
    }

    pub fn is_test(&self, element: Element<'_>, method: &MethodDefinition) -> Result<bool, MetadataError> {
        let value = find_unique(&method.annotations, &self.names.test, element)?;
        decode_marker(value, &self.names.test, element)
    }

    pub fn is_class_ignored(&self, class: &ClassDefinition) -> Result<bool, MetadataError> {
        let class_name = class.class_name();
        let element = Element::Class(&class_name);
        let value = find_unique(&class.annotations, &self.names.ignore, element)?;
        decode_marker(value, &self.names.ignore, element)
    }

    pub fn resolve_method(
        &self,
        element: Element<'_>,
        method: &MethodDefinition,
    ) -> Result<MethodModifiers, MetadataError> {
        let annotations = &method.annotations;

        let ignored = decode_marker(
            find_unique(annotations, &self.names.ignore, element)?,
            &self.names.ignore,
            element,
        )?;
        let permissions_to_revoke = decode_strings(
            find_unique(annotations, &self.names.revoke_permission, element)?,
            &self.names.revoke_permission,
            element,
        )?;
        let properties = decode_pairs(
            find_unique(annotations, &self.names.test_properties, element)?,
            &self.names.test_properties,
            element,
        )?;

        Ok(MethodModifiers {
            ignored,
            permissions_to_revoke,
            properties,
        })
    }
}

fn find_unique<'m>(
    annotations: &'m [Annotation],
    type_name: &str,
    element: Element<'_>,
) -> Result<Option<&'m AnnotationValue>, MetadataError> {
    let mut matching = annotations.iter().filter(|a| a.is_type(type_name));
    let first = matching.next();
    if matching.next().is_some() {
        return Err(MetadataError::duplicate_annotation(element.to_string(), type_name));
    }
    Ok(first.map(|a| &a.value))
}

fn decode_marker(
    value: Option<&AnnotationValue>,
    type_name: &str,
    element: Element<'_>,
) -> Result<bool, MetadataError> {
    match value {
        None => Ok(false),
        Some(AnnotationValue::Marker) => Ok(true),
        Some(other) => Err(MetadataError::unexpected_shape(
            element.to_string(),
            type_name,
            "marker",
            other.shape(),
        )),
    }
}

fn decode_strings(
    value: Option<&AnnotationValue>,
    type_name: &str,
    element: Element<'_>,
) -> Result<Vec<String>, MetadataError> {
    match value {
        None => Ok(Vec::new()),
        Some(AnnotationValue::Strings(values)) => Ok(values.clone()),
        Some(other) => Err(MetadataError::unexpected_shape(
            element.to_string(),
            type_name,
            "strings",
            other.shape(),
        )),
    }
}

/// Later pairs overwrite earlier ones with the same key.
fn decode_pairs(
    value: Option<&AnnotationValue>,
    type_name: &str,
    element: Element<'_>,
) -> Result<BTreeMap<String, String>, MetadataError> {
    match value {
        None => Ok(BTreeMap::new()),
        Some(AnnotationValue::Pairs(pairs)) => Ok(pairs.iter().cloned().collect()),
        Some(other) => Err(MetadataError::unexpected_shape(
            element.to_string(),
            type_name,
            "pairs",
            other.shape(),
        )),
    }
}
