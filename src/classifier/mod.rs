mod matchers;

pub use matchers::{AnnotatedClassMatcher, DefaultTestClassMatcher, PatternMatcher};

use crate::model::ClassDefinition;

/// Decides whether a class definition holds test methods worth loading.
pub trait TestClassMatcher: Send + Sync {
    fn matches(&self, class: &ClassDefinition) -> bool;
}

impl<F> TestClassMatcher for F
where
    F: Fn(&ClassDefinition) -> bool + Send + Sync,
{
    fn matches(&self, class: &ClassDefinition) -> bool {
        self(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_matcher() {
        let matcher = |class: &ClassDefinition| class.name.contains("Login");
        assert!(matcher.matches(&ClassDefinition::new("com.example.LoginTest")));
        assert!(!matcher.matches(&ClassDefinition::new("com.example.CameraTest")));
    }

    #[test]
    fn test_matcher_as_trait_object() {
        let matcher: Box<dyn TestClassMatcher> = Box::new(DefaultTestClassMatcher);
        let matcher: &dyn TestClassMatcher = matcher.as_ref();
        assert!(matcher.matches(&ClassDefinition::new("com.example.LoginTest")));
    }
}
