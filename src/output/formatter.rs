use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::model::TestCaseEvent;

#[derive(Debug, Serialize)]
pub struct SuiteOutput<'a> {
    pub package: String,
    pub total_tests: usize,
    pub ignored_tests: usize,
    pub tests: Vec<&'a TestCaseEvent>,
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(
        package: &Path,
        events: &HashSet<TestCaseEvent>,
        format: OutputFormat,
    ) -> Result<String, serde_json::Error> {
        let output = Self::build_output(package, events);

        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&output)?),
            OutputFormat::Text => Ok(Self::render_text(&output)),
        }
    }

    /// Sorts by class then method so repeated runs print identically.
    pub fn build_output<'a>(package: &Path, events: &'a HashSet<TestCaseEvent>) -> SuiteOutput<'a> {
        let mut tests: Vec<&TestCaseEvent> = events.iter().collect();
        tests.sort_by(|a, b| {
            (a.test_class.as_str(), a.test_method.as_str())
                .cmp(&(b.test_class.as_str(), b.test_method.as_str()))
        });

        SuiteOutput {
            package: package.display().to_string(),
            total_tests: tests.len(),
            ignored_tests: tests.iter().filter(|t| t.is_ignored).count(),
            tests,
        }
    }

    fn render_text(output: &SuiteOutput<'_>) -> String {
        let mut text = String::new();
        for test in &output.tests {
            text.push_str(&test.qualified_name());
            if test.is_ignored {
                text.push_str(" [ignored]");
            }
            if !test.permissions_to_revoke.is_empty() {
                text.push_str(&format!(" revoke={}", test.permissions_to_revoke.join(",")));
            }
            for (key, value) in &test.properties {
                text.push_str(&format!(" {key}={value}"));
            }
            text.push('\n');
        }
        text.push_str(&format!(
            "{} tests ({} ignored) in {}\n",
            output.total_tests, output.ignored_tests, output.package
        ));
        text
    }
}
