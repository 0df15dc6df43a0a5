pub mod cloud;
pub mod datacenter;
pub mod format;
pub mod graphql;
pub mod models;

use std::path::Path;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

use crate::utils::read_file_to_buffer;
use self::format::{FormatInfo, APPLICATION_JSON};
use self::models::report_config::ReportConfig;
use self::models::xray_response::XrayResponse;

#[derive(Error, Debug)]
pub enum XrayError {
    /// Local or transport failure carrying a plain-text payload.
    #[error("{0}")]
    Message(String),
    #[error("HTTP error {0}: {1}")]
    Http(StatusCode, serde_json::Value),
    #[error("GraphQL error: {0:?}")]
    GraphQl(Vec<String>),
}

impl XrayError {
    pub(crate) fn message(text: impl Into<String>) -> Self {
        XrayError::Message(text.into())
    }

    pub fn response(&self) -> Option<&str> {
        match self {
            XrayError::Message(text) => Some(text),
            _ => None,
        }
    }

    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            XrayError::Http(status, _) => Some(*status),
            _ => None,
        }
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        match self {
            XrayError::Http(_, body) => Some(body),
            _ => None,
        }
    }

    pub fn error_messages(&self) -> Option<&[String]> {
        match self {
            XrayError::GraphQl(messages) => Some(messages),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for XrayError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            XrayError::message("request timeout")
        } else {
            XrayError::message(error.to_string())
        }
    }
}

/// Per-variant wiring of the shared import engine: where the import
/// endpoints live, how the report part is named on the wire, and how the
/// backend's success envelope is normalized.
pub(crate) struct VariantProfile {
    pub import_base: String,
    pub xml_part_name: &'static str,
    pub json_part_name: &'static str,
    pub normalize: fn(StatusCode, serde_json::Value) -> XrayResponse,
}

impl VariantProfile {
    pub fn report_part_name(&self, info: &FormatInfo) -> &'static str {
        if info.is_xml() {
            self.xml_part_name
        } else {
            self.json_part_name
        }
    }
}

pub(crate) fn build_http_client(timeout: Duration) -> Result<Client, XrayError> {
    let mut headers = HeaderMap::with_capacity(1);
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(XrayError::from)
}

/// Endpoint URL for an import, standard or multipart. Query-string metadata
/// is attached only on the standard endpoint of formats that accept it; for
/// the remaining formats supplied metadata is ignored, as the backends do.
pub(crate) fn import_url(
    import_base: &str,
    info: &FormatInfo,
    config: &ReportConfig,
    multipart: bool,
) -> Result<Url, XrayError> {
    let mut endpoint = String::from(import_base);
    if !info.endpoint.is_empty() {
        endpoint.push('/');
        endpoint.push_str(info.endpoint);
    }
    if multipart {
        endpoint.push_str("/multipart");
    }
    let mut url = Url::parse(&endpoint).map_err(|e| XrayError::message(e.to_string()))?;
    if !multipart && info.supports_query_params {
        let params = query_params(config);
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, &value);
            }
        }
    }
    Ok(url)
}

// Parameter order is part of the wire contract.
fn query_params(config: &ReportConfig) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(value) = &config.project_key {
        params.push(("projectKey", value.clone()));
    }
    if let Some(value) = &config.test_plan_key {
        params.push(("testPlanKey", value.clone()));
    }
    if let Some(value) = &config.test_exec_key {
        params.push(("testExecKey", value.clone()));
    }
    if let Some(value) = &config.version {
        params.push(("fixVersion", value.clone()));
    }
    if let Some(value) = &config.revision {
        params.push(("revision", value.clone()));
    }
    if let Some(value) = config.joined_test_environments() {
        params.push(("testEnvironments", value));
    }
    params
}

pub(crate) fn validate_standard(
    config: &ReportConfig,
    info: &FormatInfo,
) -> Result<(), XrayError> {
    if info.supports_query_params
        && config.project_key.is_none()
        && config.test_exec_key.is_none()
    {
        return Err(XrayError::message(
            "projectKey or testExecKey must be defined",
        ));
    }
    Ok(())
}

pub(crate) fn validate_multipart(config: &ReportConfig) -> Result<(), XrayError> {
    if config.test_exec_info_file.is_none() && config.test_exec_info.is_none() {
        return Err(XrayError::message(
            "testExecInfoFile or testExecInfo must be defined",
        ));
    }
    Ok(())
}

pub(crate) async fn report_part(
    report_file: &Path,
    info: &FormatInfo,
) -> Result<Part, XrayError> {
    let buffer = read_file_to_buffer(report_file).await?;
    Part::bytes(buffer)
        .file_name(format!("report.{}", info.file_extension()))
        .mime_str(info.content_type)
        .map_err(XrayError::from)
}

async fn exec_info_part(config: &ReportConfig) -> Result<Part, XrayError> {
    // When both sources are given the file wins.
    let content = match (&config.test_exec_info_file, &config.test_exec_info) {
        (Some(path), _) => read_file_to_buffer(path).await?,
        (None, Some(value)) => {
            serde_json::to_vec(value).map_err(|e| XrayError::message(e.to_string()))?
        }
        (None, None) => {
            return Err(XrayError::message(
                "testExecInfoFile or testExecInfo must be defined",
            ))
        }
    };
    Part::bytes(content)
        .file_name("info.json")
        .mime_str(APPLICATION_JSON)
        .map_err(XrayError::from)
}

/// Parts in wire order: report, execution info, optional test info.
pub(crate) async fn multipart_form(
    report_file: &Path,
    config: &ReportConfig,
    info: &FormatInfo,
    report_part_name: &'static str,
) -> Result<Form, XrayError> {
    validate_multipart(config)?;
    let report = report_part(report_file, info).await?;
    let exec_info = exec_info_part(config).await?;
    let mut form = Form::new()
        .part(report_part_name, report)
        .part("info", exec_info);
    if let Some(path) = &config.test_info_file {
        let buffer = read_file_to_buffer(path).await?;
        let part = Part::bytes(buffer)
            .file_name("testInfo.json")
            .mime_str(APPLICATION_JSON)
            .map_err(XrayError::from)?;
        form = form.part("testInfo", part);
    }
    Ok(form)
}

pub(crate) fn parse_json_lenient(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap_or_else(|_| serde_json::Value::String(body.to_string()))
}

pub(crate) async fn expect_success(
    response: reqwest::Response,
) -> Result<(StatusCode, serde_json::Value), XrayError> {
    let status = response.status();
    let body = response.text().await?;
    let data = parse_json_lenient(&body);
    if !status.is_success() {
        return Err(XrayError::Http(status, data));
    }
    Ok((status, data))
}
