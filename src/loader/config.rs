use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::ConfigError;

pub const DEFAULT_TEST_ANNOTATION: &str = "org.junit.Test";
pub const DEFAULT_IGNORE_ANNOTATION: &str = "org.junit.Ignore";
pub const DEFAULT_REVOKE_PERMISSION_ANNOTATION: &str = "com.shazam.fork.RevokePermission";
pub const DEFAULT_TEST_PROPERTIES_ANNOTATION: &str = "com.shazam.fork.TestProperties";

/// Annotation types the loader recognizes, as dotted names or DEX descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationNames {
    pub test: String,
    pub ignore: String,
    pub revoke_permission: String,
    pub test_properties: String,
}

impl Default for AnnotationNames {
    fn default() -> Self {
        Self {
            test: DEFAULT_TEST_ANNOTATION.to_string(),
            ignore: DEFAULT_IGNORE_ANNOTATION.to_string(),
            revoke_permission: DEFAULT_REVOKE_PERMISSION_ANNOTATION.to_string(),
            test_properties: DEFAULT_TEST_PROPERTIES_ANNOTATION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub annotations: AnnotationNames,
    /// Regular expression over qualified class names; the default matcher
    /// applies when unset.
    pub class_pattern: Option<String>,
}

impl LoaderConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading loader config");

        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e.to_string()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "json" => serde_json::from_str(&content)
                .map_err(|e| ConfigError::parse_error(path, e.to_string())),
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| ConfigError::parse_error(path, e.to_string())),
            _ => Err(ConfigError::unsupported_format(extension)),
        }
    }
}
