//! airtray - tray-style remote for a cloud-connected air conditioner
//!
//! This is the binary entry point. All logic lives in the workspace
//! crates; this file wires configuration, client, engine and frontend
//! together.

use std::time::Duration;

use clap::Parser;

use airtray_api::RemoClient;
use airtray_app::{signals, Config, Engine};
use airtray_ui::StatusLineIndicator;

/// Tray-style remote for a cloud-connected air conditioner
#[derive(Parser, Debug)]
#[command(name = "airtray")]
#[command(about = "Watch and control one air conditioner from the desktop", long_about = None)]
struct Args {
    /// Appliance id to control (overrides REMO_APPLIANCE_ID)
    #[arg(long, value_name = "ID")]
    appliance: Option<String>,

    /// Poll interval in seconds
    #[arg(long, value_name = "SECS")]
    poll_interval: Option<u64>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    airtray_core::logging::init()?;

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(appliance) = args.appliance {
        config.appliance_id = appliance;
    }
    if let Some(secs) = args.poll_interval {
        config.poll_interval = Duration::from_secs(secs);
    }

    let client = RemoClient::with_base_url(config.token.clone(), config.base_url.clone())?;
    let engine = Engine::new(config, client, StatusLineIndicator::new());

    // SIGINT/SIGTERM and the quit menu entry both land as a quit message.
    signals::spawn_signal_handler(engine.sender());

    engine.run().await?;
    Ok(())
}
