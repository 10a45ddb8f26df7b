//! Forwarding of reserves to the iCal update endpoint.

use epgs_ical_core::endpoint::{update_url, ACCESS_KEY_HEADER};
use epgs_ical_core::render::indent_json;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use crate::error::{Result, Step, SyncError};

/// HTTP client for the iCal update service.
#[derive(Debug, Clone)]
pub struct IcalClient {
    client: reqwest::Client,
    base_url: String,
    access_key: Option<String>,
}

impl IcalClient {
    /// Create a new client. The access key, when present, is sent as
    /// `X-Access-Key` on every update.
    pub fn new(base_url: impl Into<String>, access_key: Option<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, access_key)
    }

    /// Create a client that reuses an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        access_key: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            access_key,
        }
    }

    /// POST the reserves payload to `{base_url}/update`.
    ///
    /// Only status 200 counts as success. On any other status the response
    /// body is read into [`SyncError::UpdateRejected`], re-indented when it
    /// is JSON and as raw text otherwise.
    pub async fn update(&self, body: Vec<u8>) -> Result<()> {
        let url = update_url(&self.base_url);
        tracing::info!(
            %url,
            bytes = body.len(),
            access_key = self.access_key.is_some(),
            "updating iCal"
        );

        let mut request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(key) = &self.access_key {
            request = request.header(ACCESS_KEY_HEADER, key);
        }

        let response = request.send().await.map_err(|source| SyncError::Network {
            step: Step::Update,
            source,
        })?;

        let status = response.status();
        if status == StatusCode::OK {
            return Ok(());
        }

        tracing::warn!(status = status.as_u16(), "iCal update rejected");
        let raw = response
            .bytes()
            .await
            .map_err(|source| SyncError::ReadBody {
                step: Step::Update,
                source,
            })?;
        let body = indent_json(&raw).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "could not format update response as JSON");
            String::from_utf8_lossy(&raw).into_owned()
        });
        Err(SyncError::UpdateRejected {
            status: status.as_u16(),
            body,
        })
    }
}
