//! The fetch-then-update flow.

use crate::client::{EpgStationClient, IcalClient};
use crate::error::Result;

/// Fetch every reserve from EPGStation and forward the payload to the iCal
/// service. Returns the number of bytes forwarded.
///
/// Stops at the first failure; the update is never attempted when fetching
/// fails.
pub async fn sync_reserves(epgstation: &EpgStationClient, ical: &IcalClient) -> Result<usize> {
    let body = epgstation.fetch_all_reserves().await?;
    let forwarded = body.len();
    ical.update(body).await?;
    Ok(forwarded)
}
