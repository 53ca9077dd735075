use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, trace};

use super::resolver::{AnnotationResolver, Element};
use super::{check_package, AnnotationNames, LoaderConfig};
use crate::classifier::TestClassMatcher;
use crate::container::ContainerProvider;
use crate::error::{MetadataError, Result};
use crate::model::{Container, TestCaseEvent};

/// Loads the test cases of an instrumentation package.
///
/// The loader borrows its collaborators and keeps nothing between calls:
/// each [`load_test_suite`](Self::load_test_suite) extracts the container
/// afresh and drops it before returning.
pub struct TestSuiteLoader<'a, P: ?Sized, M: ?Sized> {
    provider: &'a P,
    matcher: &'a M,
    annotations: AnnotationNames,
}

impl<'a, P, M> TestSuiteLoader<'a, P, M>
where
    P: ContainerProvider + ?Sized,
    M: TestClassMatcher + ?Sized,
{
    pub fn new(provider: &'a P, matcher: &'a M) -> Self {
        Self {
            provider,
            matcher,
            annotations: AnnotationNames::default(),
        }
    }

    pub fn with_annotations(mut self, annotations: AnnotationNames) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn with_config(self, config: &LoaderConfig) -> Self {
        self.with_annotations(config.annotations.clone())
    }

    pub fn load_test_suite(&self, package: &Path) -> Result<HashSet<TestCaseEvent>> {
        check_package(package)?;

        let container = self.provider.extract(package)?;
        debug!(
            package = %package.display(),
            classes = container.class_count(),
            "extracted class metadata"
        );

        let events = self.collect_events(&container)?;
        debug!(tests = events.len(), "loaded test suite");
        Ok(events)
    }

    fn collect_events(&self, container: &Container) -> Result<HashSet<TestCaseEvent>> {
        let resolver = AnnotationResolver::new(&self.annotations);
        let mut events: HashMap<(String, String), TestCaseEvent> = HashMap::new();

        for (index, class) in container.classes.iter().enumerate() {
            if !self.matcher.matches(class) {
                trace!(class = %class.name, "skipping non-test class");
                continue;
            }

            let class_name = class.class_name();
            if class_name.trim().is_empty() {
                return Err(MetadataError::empty_name("class", format!("container entry {index}")).into());
            }
            let class_ignored = resolver.is_class_ignored(class)?;

            for method in &class.methods {
                if method.name.trim().is_empty() {
                    return Err(MetadataError::empty_name("method", class_name.as_str()).into());
                }

                let element = Element::Method {
                    class: &class_name,
                    method: &method.name,
                };
                if !resolver.is_test(element, method)? {
                    continue;
                }

                // Every test method is decoded, even a duplicate that is dropped below.
                let modifiers = resolver.resolve_method(element, method)?;

                let entry = match events.entry((class_name.clone(), method.name.clone())) {
                    Entry::Occupied(_) => {
                        debug!(test = %element, "duplicate test method, keeping first");
                        continue;
                    }
                    Entry::Vacant(entry) => entry,
                };

                trace!(
                    test = %element,
                    ignored = class_ignored || modifiers.ignored,
                    permissions = modifiers.permissions_to_revoke.len(),
                    properties = modifiers.properties.len(),
                    "found test method"
                );

                entry.insert(TestCaseEvent::new(
                    class_name.as_str(),
                    method.name.as_str(),
                    class_ignored || modifiers.ignored,
                    modifiers.permissions_to_revoke,
                    modifiers.properties,
                ));
            }
        }

        Ok(events.into_values().collect())
    }
}

/// Loads the test cases of `package` with the default annotation names.
pub fn load_test_suite<P, M>(package: &Path, provider: &P, matcher: &M) -> Result<HashSet<TestCaseEvent>>
where
    P: ContainerProvider + ?Sized,
    M: TestClassMatcher + ?Sized,
{
    TestSuiteLoader::new(provider, matcher).load_test_suite(package)
}
