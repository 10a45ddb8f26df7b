//! CLI argument definitions.

use clap::Parser;
use epgs_ical_core::endpoint::normalize_base_url;

/// Sync EPGStation reserves into an iCal update service.
#[derive(Debug, Parser)]
#[command(name = "epgs-reserves-ical-updater")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// EPGStation base URL, e.g. http://localhost:8888.
    #[arg(env = "EPGS_URL", value_parser = normalize_base_url)]
    pub epgs_url: String,

    /// iCal service base URL; reserves are posted to `<ical_url>/update`.
    #[arg(env = "ICAL_URL", value_parser = normalize_base_url)]
    pub ical_url: String,

    /// Access key sent as the X-Access-Key header. Omitted when not given.
    #[arg(env = "ICAL_ACCESS_KEY")]
    pub ical_access_key: Option<String>,

    /// Suppress the success message.
    #[arg(long, short)]
    pub quiet: bool,
}
