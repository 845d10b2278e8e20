//! Scripted fake of [`AirconApi`] for engine and dispatcher tests
//!
//! Enabled for this crate's own tests and, via the `test-helpers`
//! feature, for downstream crates' dev-dependencies.

use std::sync::{Arc, Mutex};

use airtray_core::prelude::*;
use airtray_core::{ApplianceSnapshot, DeviceReading};

use crate::client::AirconApi;
use crate::commands::AirconSetting;

/// What a fake appliance fetch should yield.
#[derive(Debug, Clone)]
enum ApplianceScript {
    Found(ApplianceSnapshot),
    Missing,
    Fail,
}

/// Scripted [`AirconApi`] that records every setting sent through it.
///
/// Clones share the recording, so a clone handed to an engine can be
/// inspected from the test afterwards.
#[derive(Debug, Clone)]
pub struct FakeApi {
    reading: Option<f64>,
    reading_fails: bool,
    appliance: ApplianceScript,
    commands_fail: bool,
    sent: Arc<Mutex<Vec<AirconSetting>>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            reading: None,
            reading_fails: false,
            appliance: ApplianceScript::Missing,
            commands_fail: false,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Device polls yield this temperature.
    pub fn with_reading(mut self, temperature: f64) -> Self {
        self.reading = Some(temperature);
        self
    }

    /// Device polls fail with a transport error.
    pub fn with_failing_reading(mut self) -> Self {
        self.reading_fails = true;
        self
    }

    /// Appliance polls find this snapshot.
    pub fn with_appliance(mut self, snapshot: ApplianceSnapshot) -> Self {
        self.appliance = ApplianceScript::Found(snapshot);
        self
    }

    /// Appliance polls succeed but the target id is absent.
    pub fn with_missing_appliance(mut self) -> Self {
        self.appliance = ApplianceScript::Missing;
        self
    }

    /// Appliance polls fail with a transport error.
    pub fn with_failing_appliance(mut self) -> Self {
        self.appliance = ApplianceScript::Fail;
        self
    }

    /// Settings writes fail with a transport error.
    pub fn with_failing_commands(mut self) -> Self {
        self.commands_fail = true;
        self
    }

    /// Everything sent through [`AirconApi::send_aircon_setting`] so far,
    /// in order — including writes that were scripted to fail.
    pub fn sent(&self) -> Vec<AirconSetting> {
        self.sent.lock().unwrap().clone()
    }
}

impl AirconApi for FakeApi {
    async fn fetch_device_reading(&self) -> Result<DeviceReading> {
        if self.reading_fails {
            return Err(Error::transport("fake device fetch failure"));
        }
        Ok(DeviceReading {
            current_temperature: self.reading,
        })
    }

    async fn fetch_appliance_state(
        &self,
        _appliance_id: &str,
    ) -> Result<Option<ApplianceSnapshot>> {
        match &self.appliance {
            ApplianceScript::Found(snapshot) => Ok(Some(snapshot.clone())),
            ApplianceScript::Missing => Ok(None),
            ApplianceScript::Fail => Err(Error::transport("fake appliance fetch failure")),
        }
    }

    async fn send_aircon_setting(&self, _appliance_id: &str, setting: AirconSetting) -> Result<()> {
        self.sent.lock().unwrap().push(setting);
        if self.commands_fail {
            return Err(Error::transport("fake command failure"));
        }
        Ok(())
    }
}
