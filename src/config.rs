use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use directories::UserDirs;
use serde::{Deserialize, Serialize};

use crate::constants::{CANT_READ_CONFIG, CONFIG_DIR, NOT_PARSE_CONFIG};
use crate::xray_api::models::settings::{XrayCloudSettings, XrayDatacenterSettings};
use crate::xray_api::XrayError;

/// CLI configuration, read from `~/.config/wox/config.json` with environment
/// variables taking precedence for credentials.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct Config {
    /// Xray cloud API client id
    pub client_id: Option<String>,
    /// Xray cloud API client secret
    pub client_secret: Option<String>,
    /// Jira base URL of a server/datacenter instance
    pub jira_base_url: Option<String>,
    pub jira_username: Option<String>,
    pub jira_password: Option<String>,
    pub jira_token: Option<String>,
    /// Request timeout in milliseconds
    pub timeout_ms: Option<u64>,
}

impl Config {
    /// Config file, env overrides applied. A missing file is not an error;
    /// everything can come from the environment.
    pub fn load() -> Result<Self, XrayError> {
        let path = Self::default_path()?;
        let config = if path.exists() {
            Self::get_config(path)?
        } else {
            Self::default()
        };
        Ok(config.apply_env_overrides())
    }

    pub fn get_config(path_to_config: PathBuf) -> Result<Self, XrayError> {
        let file =
            File::open(path_to_config).map_err(|_| XrayError::message(CANT_READ_CONFIG))?;
        serde_json::from_reader(file).map_err(|_| XrayError::message(NOT_PARSE_CONFIG))
    }

    pub fn default_path() -> Result<PathBuf, XrayError> {
        let user_dirs = UserDirs::new()
            .ok_or_else(|| XrayError::message("Failed to retrieve the user's directories"))?;
        Ok(user_dirs.home_dir().join(CONFIG_DIR).join("config.json"))
    }

    fn apply_env_overrides(mut self) -> Self {
        if let Ok(value) = env::var("WOX_CLIENT_ID") {
            self.client_id = Some(value);
        }
        if let Ok(value) = env::var("WOX_CLIENT_SECRET") {
            self.client_secret = Some(value);
        }
        if let Ok(value) = env::var("WOX_JIRA_TOKEN") {
            self.jira_token = Some(value);
        }
        self
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    pub fn cloud_settings(&self) -> Result<XrayCloudSettings, XrayError> {
        match (&self.client_id, &self.client_secret) {
            (Some(client_id), Some(client_secret)) => Ok(XrayCloudSettings {
                client_id: client_id.clone(),
                client_secret: client_secret.clone(),
                base_url: None,
                timeout: self.timeout(),
            }),
            _ => Err(XrayError::message(
                "client_id and client_secret must be configured",
            )),
        }
    }

    pub fn datacenter_settings(&self) -> Result<XrayDatacenterSettings, XrayError> {
        let jira_base_url = self
            .jira_base_url
            .clone()
            .ok_or_else(|| XrayError::message("jira_base_url must be configured"))?;
        Ok(XrayDatacenterSettings {
            jira_base_url,
            jira_username: self.jira_username.clone(),
            jira_password: self.jira_password.clone(),
            jira_token: self.jira_token.clone(),
            timeout: self.timeout(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wox_config_test_{}.json",
            std::process::id()
        ));
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_get_config() {
        let path = write_config(
            "{\"client_id\":\"id\",\"client_secret\":\"secret\",\
             \"jira_base_url\":\"http://xray.example.com\",\"timeout_ms\":2000}",
        );
        let config = Config::get_config(path.clone()).unwrap();
        assert_eq!(config.client_id.as_deref(), Some("id"));
        assert_eq!(config.jira_base_url.as_deref(), Some("http://xray.example.com"));
        assert_eq!(config.timeout_ms, Some(2000));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_get_config_missing_file() {
        let error = Config::get_config(PathBuf::from("no/such/config.json")).unwrap_err();
        assert_eq!(error.response().unwrap(), CANT_READ_CONFIG);
    }

    #[test]
    fn test_cloud_settings_require_credentials() {
        let error = Config::default().cloud_settings().unwrap_err();
        assert_eq!(
            error.response().unwrap(),
            "client_id and client_secret must be configured"
        );
    }

    #[test]
    fn test_cloud_settings() {
        let config = Config {
            client_id: Some("id".to_string()),
            client_secret: Some("secret".to_string()),
            timeout_ms: Some(2000),
            ..Config::default()
        };
        let settings = config.cloud_settings().unwrap();
        assert_eq!(settings.client_id, "id");
        assert_eq!(settings.timeout, Some(Duration::from_millis(2000)));
    }

    #[test]
    fn test_datacenter_settings_require_base_url() {
        let error = Config::default().datacenter_settings().unwrap_err();
        assert_eq!(error.response().unwrap(), "jira_base_url must be configured");
    }

    #[test]
    fn test_datacenter_settings() {
        let config = Config {
            jira_base_url: Some("http://xray.example.com".to_string()),
            jira_username: Some("username".to_string()),
            jira_password: Some("password".to_string()),
            ..Config::default()
        };
        let settings = config.datacenter_settings().unwrap();
        assert_eq!(settings.jira_base_url, "http://xray.example.com");
        assert_eq!(settings.jira_username.as_deref(), Some("username"));
        assert!(settings.timeout.is_none());
    }
}
