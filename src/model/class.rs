use serde::{Deserialize, Serialize};

use super::Annotation;
use crate::utils::to_class_name;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    #[serde(default)]
    pub classes: Vec<ClassDefinition>,
}

impl Container {
    pub fn new(classes: Vec<ClassDefinition>) -> Self {
        Self { classes }
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDefinition {
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub methods: Vec<MethodDefinition>,
}

impl ClassDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_method(mut self, method: MethodDefinition) -> Self {
        self.methods.push(method);
        self
    }

    /// Dotted Java name, whether the container stored a descriptor or not.
    pub fn class_name(&self) -> String {
        to_class_name(&self.name)
    }

    pub fn has_annotation(&self, type_name: &str) -> bool {
        self.annotations.iter().any(|a| a.is_type(type_name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDefinition {
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl MethodDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_from_descriptor() {
        let class = ClassDefinition::new("Lcom/example/LoginTest;");
        assert_eq!(class.class_name(), "com.example.LoginTest");
    }

    #[test]
    fn test_has_annotation() {
        let class = ClassDefinition::new("com.example.LoginTest")
            .with_annotation(Annotation::marker("Lorg/junit/Ignore;"));
        assert!(class.has_annotation("org.junit.Ignore"));
        assert!(!class.has_annotation("org.junit.Test"));
    }

    #[test]
    fn test_deserialize_minimal_class() {
        let class: ClassDefinition =
            serde_json::from_str(r#"{"name": "com.example.EmptyTest"}"#).unwrap();
        assert!(class.annotations.is_empty());
        assert!(class.methods.is_empty());
    }
}
