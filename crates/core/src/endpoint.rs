//! Endpoint paths and base URL handling for both services.

use thiserror::Error;
use url::Url;

/// Reserves list endpoint on EPGStation.
pub const RESERVES_PATH: &str = "/api/reserves";

/// Update endpoint on the iCal service.
pub const UPDATE_PATH: &str = "/update";

/// Header carrying the optional iCal access key.
pub const ACCESS_KEY_HEADER: &str = "X-Access-Key";

/// Errors that can occur when validating a base URL.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrlError {
    #[error("invalid URL: {0}")]
    Parse(#[from] url::ParseError),
    #[error("unsupported URL scheme `{0}` (expected http or https)")]
    UnsupportedScheme(String),
}

/// Validates a service base URL and strips trailing slashes.
///
/// The input is kept as written otherwise, so a base with a path prefix such
/// as `http://nas.local/epgstation` keeps that prefix.
pub fn normalize_base_url(input: &str) -> Result<String, UrlError> {
    let url = Url::parse(input.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(input.trim().trim_end_matches('/').to_string()),
        other => Err(UrlError::UnsupportedScheme(other.to_string())),
    }
}

/// Builds the reserves list URL, without query parameters.
pub fn reserves_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), RESERVES_PATH)
}

/// Builds the iCal update URL.
pub fn update_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), UPDATE_PATH)
}
