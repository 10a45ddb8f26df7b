//! Sync error types.

use std::fmt;

use epgs_ical_core::reserves::EnvelopeError;
use thiserror::Error;

/// Result type alias for the sync flow.
pub type Result<T> = std::result::Result<T, SyncError>;

/// The HTTP call an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// First `GET /api/reserves`, without a limit.
    InitialFetch,
    /// Second `GET /api/reserves` with `limit` set to the total.
    FullFetch,
    /// `POST /update` on the iCal service.
    Update,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Step::InitialFetch => "initial reserves fetch",
            Step::FullFetch => "full reserves fetch",
            Step::Update => "iCal update",
        })
    }
}

/// Errors that can occur while syncing reserves.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("{step} request failed: {source}")]
    Network {
        step: Step,
        #[source]
        source: reqwest::Error,
    },

    #[error("{step} returned status {status}")]
    Status { step: Step, status: u16 },

    #[error("failed to read {step} response body: {source}")]
    ReadBody {
        step: Step,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode reserves payload: {0}")]
    Decode(#[from] EnvelopeError),

    /// `body` holds the rendered response body for display.
    #[error("update failed: iCal service returned status {status}")]
    UpdateRejected { status: u16, body: String },
}

impl SyncError {
    /// The step this error came from, when it is tied to a single request.
    pub fn step(&self) -> Option<Step> {
        match self {
            SyncError::Network { step, .. }
            | SyncError::Status { step, .. }
            | SyncError::ReadBody { step, .. } => Some(*step),
            SyncError::Decode(_) => Some(Step::InitialFetch),
            SyncError::UpdateRejected { .. } => Some(Step::Update),
        }
    }
}
