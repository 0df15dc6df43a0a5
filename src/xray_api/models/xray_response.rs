use reqwest::StatusCode;
use serde_json::Value;

/// Raw transport response retained for diagnostics.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub data: Value,
}

/// The uniform success contract both backends normalize into.
#[derive(Debug, Clone)]
pub struct XrayResponse {
    pub id: String,
    pub key: String,
    pub self_url: String,
    pub response: RawResponse,
}

impl XrayResponse {
    /// Cloud success bodies carry the issue at the top level.
    pub(crate) fn from_cloud(status: StatusCode, data: Value) -> Self {
        let (id, key, self_url) = extract_issue(&data);
        Self {
            id,
            key,
            self_url,
            response: RawResponse { status, data },
        }
    }

    /// Datacenter success bodies nest the issue under `testExecIssue`.
    pub(crate) fn from_datacenter(status: StatusCode, data: Value) -> Self {
        let (id, key, self_url) = match data.get("testExecIssue") {
            Some(issue) => extract_issue(issue),
            None => Default::default(),
        };
        Self {
            id,
            key,
            self_url,
            response: RawResponse { status, data },
        }
    }
}

fn extract_issue(issue: &Value) -> (String, String, String) {
    (field(issue, "id"), field(issue, "key"), field(issue, "self"))
}

fn field(issue: &Value, name: &str) -> String {
    issue
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
