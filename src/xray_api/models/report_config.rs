use std::path::PathBuf;

/// Per-call submission settings. `format` is one of the format constants;
/// everything else is optional metadata for the target Test Execution.
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    pub format: Option<String>,
    pub project_key: Option<String>,
    pub test_plan_key: Option<String>,
    pub test_exec_key: Option<String>,
    /// Fix version, sent as `fixVersion`.
    pub version: Option<String>,
    pub revision: Option<String>,
    pub test_environment: Option<String>,
    pub test_environments: Option<Vec<String>>,
    /// Inline Test Execution fields for multipart submissions.
    pub test_exec_info: Option<serde_json::Value>,
    /// File with Test Execution fields; wins over `test_exec_info`.
    pub test_exec_info_file: Option<PathBuf>,
    pub test_info_file: Option<PathBuf>,
}

impl ReportConfig {
    pub fn new(format: &str) -> Self {
        Self {
            format: Some(format.to_string()),
            ..Self::default()
        }
    }

    /// The `testEnvironments` parameter value: a list joins with `;`,
    /// a single scalar passes through untouched.
    pub(crate) fn joined_test_environments(&self) -> Option<String> {
        if let Some(environments) = &self.test_environments {
            if !environments.is_empty() {
                return Some(environments.join(";"));
            }
        }
        self.test_environment.clone()
    }
}
