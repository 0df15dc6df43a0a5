pub const CONFIG_DIR: &str = ".config/wox";
pub const PARSE_HEADER_VALUE: &str = "Could not convert HeaderValue";
pub const INVALID_BASE_URL: &str = "The base URL must be an http(s) URL";
pub const CANT_READ_CONFIG: &str = "Couldn't read the config";
pub const NOT_PARSE_CONFIG: &str = "Couldn't parse the config";

/// Standard CLI message
#[derive(Debug)]
pub enum Message {
    ExecutionImported(String, String),
    ExecutionAssociated(String, String),
}

impl Message {
    pub fn to_formatted_string(&self) -> String {
        match self {
            Message::ExecutionImported(key, self_url) => {
                format!("Imported results into Test Execution {} <{}>", key, self_url)
            }
            Message::ExecutionAssociated(exec, plan) => {
                format!("Associated Test Execution {} to Test Plan {}", exec, plan)
            }
        }
    }
}
