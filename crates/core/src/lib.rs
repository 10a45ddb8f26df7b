//! epgs_ical_core - Pure functions for syncing EPGStation reserves into an iCal service.
//!
//! Nothing in this crate performs I/O. The HTTP side lives in
//! `epgs_reserves_ical_updater`.

pub mod endpoint;
pub mod render;
pub mod reserves;
