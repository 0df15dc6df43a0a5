use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::HeaderValue;

use crate::constants::PARSE_HEADER_VALUE;
use crate::xray_api::XrayError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Cloud deployment credentials. `base_url` defaults to the public cloud
/// endpoint and exists so tests can point the client at a local server.
#[derive(Debug, Clone, Default)]
pub struct XrayCloudSettings {
    pub client_id: String,
    pub client_secret: String,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
}

/// Datacenter/server deployment settings. Either a personal access token or
/// a username/password pair; the token wins when both are configured.
#[derive(Debug, Clone, Default)]
pub struct XrayDatacenterSettings {
    pub jira_base_url: String,
    pub jira_username: Option<String>,
    pub jira_password: Option<String>,
    pub jira_token: Option<String>,
    pub timeout: Option<Duration>,
}

impl XrayDatacenterSettings {
    /// Authorization header for every outgoing request. `Ok(None)` means no
    /// credential mode is configured, which is reported at the first request
    /// attempt rather than at construction.
    pub(crate) fn authorization_header(&self) -> Result<Option<HeaderValue>, XrayError> {
        if let Some(token) = &self.jira_token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| XrayError::message(PARSE_HEADER_VALUE))?;
            return Ok(Some(value));
        }
        if let (Some(username), Some(password)) = (&self.jira_username, &self.jira_password) {
            let credential = STANDARD.encode(format!("{username}:{password}"));
            let value = HeaderValue::from_str(&format!("Basic {credential}"))
                .map_err(|_| XrayError::message(PARSE_HEADER_VALUE))?;
            return Ok(Some(value));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_credentials_are_base64_encoded() {
        let settings = XrayDatacenterSettings {
            jira_base_url: "http://xray.example.com".to_string(),
            jira_username: Some("username".to_string()),
            jira_password: Some("password".to_string()),
            ..XrayDatacenterSettings::default()
        };
        let header = settings.authorization_header().unwrap().unwrap();
        assert_eq!(header.to_str().unwrap(), "Basic dXNlcm5hbWU6cGFzc3dvcmQ=");
    }

    #[test]
    fn test_token_becomes_bearer_header() {
        let settings = XrayDatacenterSettings {
            jira_base_url: "http://xray.example.com".to_string(),
            jira_token: Some("OTE0ODc2NDE2NTgxOnrhigwOreFoyNIA9lXTZaOcgbNY".to_string()),
            ..XrayDatacenterSettings::default()
        };
        let header = settings.authorization_header().unwrap().unwrap();
        assert_eq!(
            header.to_str().unwrap(),
            "Bearer OTE0ODc2NDE2NTgxOnrhigwOreFoyNIA9lXTZaOcgbNY"
        );
    }

    #[test]
    fn test_token_wins_over_basic_credentials() {
        let settings = XrayDatacenterSettings {
            jira_base_url: "http://xray.example.com".to_string(),
            jira_username: Some("username".to_string()),
            jira_password: Some("password".to_string()),
            jira_token: Some("pat".to_string()),
            ..XrayDatacenterSettings::default()
        };
        let header = settings.authorization_header().unwrap().unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer pat");
    }

    #[test]
    fn test_no_credentials_yields_none() {
        let settings = XrayDatacenterSettings {
            jira_base_url: "http://xray.example.com".to_string(),
            ..XrayDatacenterSettings::default()
        };
        assert!(settings.authorization_header().unwrap().is_none());
    }

    #[test]
    fn test_invalid_token_characters_are_rejected() {
        let settings = XrayDatacenterSettings {
            jira_base_url: "http://xray.example.com".to_string(),
            jira_token: Some("bad\ntoken".to_string()),
            ..XrayDatacenterSettings::default()
        };
        let error = settings.authorization_header().unwrap_err();
        assert_eq!(error.response().unwrap(), PARSE_HEADER_VALUE);
    }
}
