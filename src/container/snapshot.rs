use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use super::ContainerProvider;
use crate::error::ContainerError;
use crate::model::{ClassDefinition, Container};

pub const SNAPSHOT_VERSION: &str = "1";

#[derive(Debug, Deserialize)]
struct SnapshotFile {
    version: String,
    #[serde(default)]
    classes: Vec<ClassDefinition>,
}

/// Reads a serialized class metadata snapshot (JSON or YAML) in place of a
/// binary package.
#[derive(Debug, Default, Clone, Copy)]
pub struct SnapshotProvider;

impl SnapshotProvider {
    pub fn new() -> Self {
        Self
    }

    fn parse(path: &Path, content: &str) -> Result<SnapshotFile, ContainerError> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "json" => serde_json::from_str(content)
                .map_err(|e| ContainerError::extraction_failed(path, e.to_string())),
            "yaml" | "yml" => serde_yaml::from_str(content)
                .map_err(|e| ContainerError::extraction_failed(path, e.to_string())),
            _ => Err(ContainerError::unsupported_format(extension)),
        }
    }
}

impl ContainerProvider for SnapshotProvider {
    fn extract(&self, package: &Path) -> Result<Container, ContainerError> {
        trace!(path = %package.display(), "reading metadata snapshot");

        let content = fs::read_to_string(package)
            .map_err(|e| ContainerError::extraction_failed(package, e.to_string()))?;

        let file = Self::parse(package, &content)?;
        if file.version != SNAPSHOT_VERSION {
            return Err(ContainerError::unsupported_version(package, file.version));
        }

        debug!(classes = file.classes.len(), "loaded metadata snapshot");
        Ok(Container::new(file.classes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Annotation, AnnotationValue};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extract_json_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tests.json");
        fs::write(
            &path,
            r#"{
                "version": "1",
                "classes": [{
                    "name": "Lcom/example/LoginTest;",
                    "methods": [{
                        "name": "logsIn",
                        "annotations": [{"type": "Lorg/junit/Test;"}]
                    }]
                }]
            }"#,
        )
        .unwrap();

        let container = SnapshotProvider::new().extract(&path).unwrap();
        assert_eq!(container.class_count(), 1);
        assert_eq!(container.classes[0].class_name(), "com.example.LoginTest");
        assert_eq!(
            container.classes[0].methods[0].annotations[0],
            Annotation::marker("Lorg/junit/Test;")
        );
    }

    #[test]
    fn test_extract_yaml_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tests.yaml");
        fs::write(
            &path,
            r#"
version: "1"
classes:
  - name: com.example.CameraTest
    methods:
      - name: takesPicture
        annotations:
          - type: org.junit.Test
          - type: com.shazam.fork.RevokePermission
            value:
              kind: strings
              value: [android.permission.CAMERA]
"#,
        )
        .unwrap();

        let container = SnapshotProvider::new().extract(&path).unwrap();
        let method = &container.classes[0].methods[0];
        assert_eq!(
            method.annotations[1].value,
            AnnotationValue::Strings(vec!["android.permission.CAMERA".to_string()])
        );
    }

    #[test]
    fn test_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app-test.apk");
        fs::write(&path, [0x50, 0x4b, 0x03, 0x04]).unwrap();

        let err = SnapshotProvider::new().extract(&path).unwrap_err();
        assert!(matches!(err, ContainerError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_unsupported_version() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tests.json");
        fs::write(&path, r#"{"version": "7", "classes": []}"#).unwrap();

        let err = SnapshotProvider::new().extract(&path).unwrap_err();
        assert!(matches!(err, ContainerError::UnsupportedVersion { .. }));
    }

    #[test]
    fn test_invalid_json_is_extraction_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tests.json");
        fs::write(&path, "{ not json").unwrap();

        let err = SnapshotProvider::new().extract(&path).unwrap_err();
        assert!(matches!(err, ContainerError::ExtractionFailed { .. }));
    }
}
