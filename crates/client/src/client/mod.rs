//! HTTP clients for EPGStation and the iCal update service.

pub mod epgstation;
pub mod ical;

pub use epgstation::EpgStationClient;
pub use ical::IcalClient;

use reqwest::StatusCode;

use crate::error::{Result, Step, SyncError};

/// Reads the body of a response that must have status 200.
///
/// Any other status, 2xx included, is reported as [`SyncError::Status`]
/// without reading the body.
async fn read_ok_body(step: Step, response: reqwest::Response) -> Result<Vec<u8>> {
    let status = response.status();
    if status != StatusCode::OK {
        return Err(SyncError::Status {
            step,
            status: status.as_u16(),
        });
    }
    let body = response
        .bytes()
        .await
        .map_err(|source| SyncError::ReadBody { step, source })?;
    Ok(body.to_vec())
}
