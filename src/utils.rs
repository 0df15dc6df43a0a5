use std::path::Path;

use regex::Regex;
use tokio::{fs::File, io::AsyncReadExt};

use crate::constants::INVALID_BASE_URL;
use crate::xray_api::XrayError;

/// Reads a report or metadata file whole. The OS error text is surfaced
/// untouched so callers see exactly what the filesystem reported.
pub async fn read_file_to_buffer(path: &Path) -> Result<Vec<u8>, XrayError> {
    let mut file = File::open(path)
        .await
        .map_err(|e| XrayError::message(e.to_string()))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .await
        .map_err(|e| XrayError::message(e.to_string()))?;
    Ok(buffer)
}

/// Base URLs must be http(s) and carry no trailing slash.
pub fn normalize_base_url(value: &str) -> Result<String, XrayError> {
    let regex = Regex::new(r"^https?://.+$").unwrap();
    if !regex.is_match(value) {
        return Err(XrayError::message(INVALID_BASE_URL));
    }
    let mut normalized = value.to_string();
    if normalized.ends_with('/') {
        normalized.pop();
    }
    Ok(normalized)
}
