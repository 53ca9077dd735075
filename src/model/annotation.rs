use serde::{Deserialize, Serialize};

use crate::utils::to_class_name;

/// Payload carried by an annotation, one variant per recognized shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnnotationValue {
    #[default]
    Marker,
    Strings(Vec<String>),
    Pairs(Vec<(String, String)>),
}

impl AnnotationValue {
    pub fn shape(&self) -> &'static str {
        match self {
            AnnotationValue::Marker => "marker",
            AnnotationValue::Strings(_) => "strings",
            AnnotationValue::Pairs(_) => "pairs",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub value: AnnotationValue,
}

impl Annotation {
    pub fn new(type_name: impl Into<String>, value: AnnotationValue) -> Self {
        Self {
            type_name: type_name.into(),
            value,
        }
    }

    pub fn marker(type_name: impl Into<String>) -> Self {
        Self::new(type_name, AnnotationValue::Marker)
    }

    pub fn strings<I, S>(type_name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            type_name,
            AnnotationValue::Strings(values.into_iter().map(Into::into).collect()),
        )
    }

    pub fn pairs<I, K, V>(type_name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(
            type_name,
            AnnotationValue::Pairs(
                pairs
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        )
    }

    /// Whether this annotation's type is `class_name`, comparing DEX
    /// descriptors and dotted names alike.
    pub fn is_type(&self, class_name: &str) -> bool {
        to_class_name(&self.type_name) == to_class_name(class_name)
    }
}
