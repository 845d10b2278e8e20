//! HTTP client for the cloud service
//!
//! Three endpoints: `GET /devices`, `GET /appliances`, and
//! `POST /appliances/{id}/aircon_settings`. Bearer-token auth, JSON
//! responses, single-field form bodies on the write path. No retries —
//! the poll cycle is the retry mechanism.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use airtray_core::prelude::*;
use airtray_core::{ApplianceSnapshot, DeviceReading};

use crate::commands::AirconSetting;
use crate::models::{latest_temperature, Appliance, Device};

/// Base path of the remote service.
pub const BASE_URL: &str = "https://api.nature.global/1";

/// Transport-level timeout per request.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Typed access to the remote service.
///
/// The `Send` variant exists so the engine can run against a scripted
/// fake in tests; [`RemoClient`] is the production implementation.
#[trait_variant::make(Send)]
pub trait AirconApi {
    /// Latest sensor reading from the paired device, if any device
    /// carries one. Absence of a temperature event is not an error.
    async fn fetch_device_reading(&self) -> Result<DeviceReading>;

    /// Capability map plus committed settings for one appliance.
    /// `Ok(None)` when the appliance is absent from the list — the
    /// caller must not clobber existing state in that case.
    async fn fetch_appliance_state(&self, appliance_id: &str)
        -> Result<Option<ApplianceSnapshot>>;

    /// Post one settings field. Failures surface to the caller; there is
    /// no retry here.
    async fn send_aircon_setting(&self, appliance_id: &str, setting: AirconSetting) -> Result<()>;
}

/// Production client, cloneable and connection-pooled.
#[derive(Debug, Clone)]
pub struct RemoClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl RemoClient {
    /// Client against the production base URL.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(token, BASE_URL)
    }

    /// Client against an arbitrary base URL (tests, staging).
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            token: token.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| Error::transport(format!("GET {path}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::protocol(format!("GET {path} returned {status}")));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::protocol(format!("GET {path}: {e}")))
    }
}

impl AirconApi for RemoClient {
    async fn fetch_device_reading(&self) -> Result<DeviceReading> {
        let devices: Vec<Device> = self.get_json("/devices").await?;
        debug!("device poll returned {} devices", devices.len());

        Ok(DeviceReading {
            current_temperature: latest_temperature(&devices),
        })
    }

    async fn fetch_appliance_state(
        &self,
        appliance_id: &str,
    ) -> Result<Option<ApplianceSnapshot>> {
        let appliances: Vec<Appliance> = self.get_json("/appliances").await?;

        let Some(appliance) = appliances.into_iter().find(|ap| ap.id == appliance_id) else {
            debug!("appliance {appliance_id} absent from poll response");
            return Ok(None);
        };

        appliance
            .into_snapshot()
            .map(Some)
            .ok_or_else(|| Error::protocol(format!("appliance {appliance_id} has no aircon data")))
    }

    async fn send_aircon_setting(&self, appliance_id: &str, setting: AirconSetting) -> Result<()> {
        let path = format!("/appliances/{appliance_id}/aircon_settings");
        let url = format!("{}{}", self.base_url, path);
        debug!("posting {}", setting.describe());

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .form(&[(setting.field(), setting.value())])
            .send()
            .await
            .map_err(|e| Error::transport(format!("POST {path}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::protocol(format!("POST {path} returned {status}")));
        }

        Ok(())
    }
}
