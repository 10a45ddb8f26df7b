//! Reserve fetching from EPGStation.

use epgs_ical_core::endpoint::reserves_url;
use epgs_ical_core::reserves::{FetchPlan, ReservesEnvelope, ReservesQuery};

use super::read_ok_body;
use crate::error::{Result, Step, SyncError};

/// HTTP client for the EPGStation reserves API.
#[derive(Debug, Clone)]
pub struct EpgStationClient {
    client: reqwest::Client,
    base_url: String,
}

impl EpgStationClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client that reuses an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch every reservation as the raw JSON body returned by EPGStation.
    ///
    /// The first request uses the server's default page size. When the number
    /// of returned records differs from `total`, a second request is made with
    /// `limit=total` and its body is returned as is, even if it is still
    /// incomplete. The returned bytes are never re-encoded.
    pub async fn fetch_all_reserves(&self) -> Result<Vec<u8>> {
        let url = reserves_url(&self.base_url);

        tracing::info!(%url, "fetching reserve total");
        let body = self
            .get_reserves(&url, ReservesQuery::first_page(), Step::InitialFetch)
            .await?;

        let envelope = ReservesEnvelope::parse(&body)?;
        match envelope.plan() {
            FetchPlan::Complete => {
                tracing::info!(count = envelope.count(), "first response holds every reserve");
                Ok(body)
            }
            FetchPlan::Refetch { limit } => {
                tracing::info!(
                    %url,
                    count = envelope.count(),
                    total = limit,
                    "fetching all reserves"
                );
                self.get_reserves(&url, ReservesQuery::with_limit(limit), Step::FullFetch)
                    .await
            }
        }
    }

    async fn get_reserves(&self, url: &str, query: ReservesQuery, step: Step) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(|source| SyncError::Network { step, source })?;
        read_ok_body(step, response).await
    }
}
