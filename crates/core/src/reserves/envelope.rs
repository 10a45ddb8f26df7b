//! Decoding of the `{ "reserves": [...], "total": N }` envelope.
//!
//! Individual reservation records are never interpreted: they are skipped with
//! [`IgnoredAny`] so that only their number is kept. The raw body is owned by
//! the caller and forwarded untouched.

use serde::de::IgnoredAny;
use serde::Deserialize;

use super::EnvelopeError;

/// The counting view of a reserves list response.
#[derive(Debug, Default, Deserialize)]
pub struct ReservesEnvelope {
    #[serde(default)]
    reserves: Option<Vec<IgnoredAny>>,
    #[serde(default)]
    total: u64,
}

/// What to do after the first page has been decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPlan {
    /// The first response already holds every reservation.
    Complete,
    /// Request again with `limit` set to the reported total.
    Refetch { limit: u64 },
}

impl ReservesEnvelope {
    /// Decode an envelope from a raw response body.
    ///
    /// A missing or `null` `reserves` counts as zero records and a missing
    /// `total` as zero. A body of literal `null` is an empty envelope.
    pub fn parse(body: &[u8]) -> Result<Self, EnvelopeError> {
        let envelope: Option<Self> = serde_json::from_slice(body)?;
        Ok(envelope.unwrap_or_default())
    }

    /// Number of records present in this response.
    pub fn count(&self) -> usize {
        self.reserves.as_ref().map_or(0, Vec::len)
    }

    /// Number of records the server knows about.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Decide whether a second, limit-sized request is needed.
    ///
    /// Any mismatch between `count` and `total` triggers a refetch, including
    /// a page that returned more records than `total`.
    pub fn plan(&self) -> FetchPlan {
        if self.count() as u64 == self.total {
            FetchPlan::Complete
        } else {
            FetchPlan::Refetch { limit: self.total }
        }
    }
}
