//! epgs-reserves-ical-updater CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use epgs_reserves_ical_updater::cli::Cli;
use epgs_reserves_ical_updater::{sync_reserves, EpgStationClient, IcalClient, SyncError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Usage errors exit with 1; help and version output exit with 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "epgs_reserves_ical_updater=info,epgs_ical_core=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let http = reqwest::Client::new();
    let epgstation = EpgStationClient::with_client(http.clone(), cli.epgs_url);
    let ical = IcalClient::with_client(http, cli.ical_url, cli.ical_access_key);

    match sync_reserves(&epgstation, &ical).await {
        Ok(bytes) => {
            tracing::debug!(bytes, "sync finished");
            if !cli.quiet {
                println!("Update succeeded.");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let SyncError::UpdateRejected { body, .. } = &err {
                println!("{}", body);
            }
            println!("{}", err);
            ExitCode::FAILURE
        }
    }
}
