//! epgs_reserves_ical_updater - Sync EPGStation reserves into an iCal update service.

pub mod cli;
pub mod client;
pub mod error;
pub mod sync;

pub use client::{EpgStationClient, IcalClient};
pub use error::{Result, Step, SyncError};
pub use sync::sync_reserves;
