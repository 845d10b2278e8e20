//! Runtime configuration
//!
//! Credentials come from the environment, never from flags — process
//! listings should not leak the bearer token. The appliance id and poll
//! interval can be overridden by the binary's CLI.

use std::time::Duration;

use airtray_api::BASE_URL;
use airtray_core::prelude::*;

/// Environment variable holding the bearer token.
pub const ENV_TOKEN: &str = "REMO_TOKEN";
/// Environment variable holding the target appliance id.
pub const ENV_APPLIANCE_ID: &str = "REMO_APPLIANCE_ID";

/// Fixed poll cadence.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(180);

/// Startup configuration, loaded once.
///
/// An invalid token or appliance id does not fail here — it surfaces as
/// repeated protocol errors that the poll path swallows, leaving a stale
/// display rather than a crash. Only *missing* credentials fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub appliance_id: String,
    pub base_url: String,
    pub poll_interval: Duration,
}

impl Config {
    /// Load from the environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            token: require_env(ENV_TOKEN)?,
            appliance_id: require_env(ENV_APPLIANCE_ID)?,
            base_url: BASE_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        })
    }

    #[cfg(test)]
    pub(crate) fn for_testing() -> Self {
        Self {
            token: "test-token".to_string(),
            appliance_id: "ac-1".to_string(),
            base_url: BASE_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::config(format!("{name} is not set"))),
    }
}
