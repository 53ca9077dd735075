use serde::Serialize;
use std::collections::BTreeMap;

/// One discovered test method, ready for scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TestCaseEvent {
    pub test_class: String,
    pub test_method: String,
    pub is_ignored: bool,
    pub permissions_to_revoke: Vec<String>,
    pub properties: BTreeMap<String, String>,
}

impl TestCaseEvent {
    pub fn new(
        test_class: impl Into<String>,
        test_method: impl Into<String>,
        is_ignored: bool,
        permissions_to_revoke: Vec<String>,
        properties: BTreeMap<String, String>,
    ) -> Self {
        Self {
            test_class: test_class.into(),
            test_method: test_method.into(),
            is_ignored,
            permissions_to_revoke,
            properties,
        }
    }

    /// `class#method`, the form used in logs and error messages.
    pub fn qualified_name(&self) -> String {
        format!("{}#{}", self.test_class, self.test_method)
    }
}
