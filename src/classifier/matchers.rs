use regex::Regex;
use tracing::trace;

use super::TestClassMatcher;
use crate::error::ConfigError;
use crate::model::ClassDefinition;
use crate::utils::simple_name;

/// Accepts classes whose simple name ends in `Test` and whose qualified name
/// never mentions `Abstract`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTestClassMatcher;

impl TestClassMatcher for DefaultTestClassMatcher {
    fn matches(&self, class: &ClassDefinition) -> bool {
        let name = class.class_name();
        simple_name(&name).ends_with("Test") && !name.contains("Abstract")
    }
}

/// Accepts classes whose qualified name matches a regular expression.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    pattern: Regex,
}

impl PatternMatcher {
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let pattern =
            Regex::new(pattern).map_err(|e| ConfigError::invalid_pattern(pattern, e.to_string()))?;
        Ok(Self { pattern })
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl TestClassMatcher for PatternMatcher {
    fn matches(&self, class: &ClassDefinition) -> bool {
        let name = class.class_name();
        let matched = self.pattern.is_match(&name);
        trace!(class = %name, pattern = %self.pattern, matched, "pattern match");
        matched
    }
}

/// Accepts classes carrying a given class-level annotation, e.g.
/// `org.junit.runner.RunWith`.
#[derive(Debug, Clone)]
pub struct AnnotatedClassMatcher {
    annotation: String,
}

impl AnnotatedClassMatcher {
    pub fn new(annotation: impl Into<String>) -> Self {
        Self {
            annotation: annotation.into(),
        }
    }
}

impl TestClassMatcher for AnnotatedClassMatcher {
    fn matches(&self, class: &ClassDefinition) -> bool {
        class.has_annotation(&self.annotation)
    }
}
