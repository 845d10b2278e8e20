//! # airtray-api - Remote Service Client
//!
//! Typed HTTP access to the cloud service behind the appliance: device
//! sensor reads, appliance capability/settings reads, and single-field
//! settings writes.
//!
//! Depends on [`airtray_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Client
//! - [`AirconApi`] - the trait the engine polls and writes through
//! - [`RemoClient`] - production implementation (bearer auth, pooled)
//!
//! ### Command Encoding
//! - [`AirconSetting`] - one discrete settings write and its wire field/value
//!
//! ### Wire Models
//! - [`Device`], [`Appliance`] - payload shapes of the two read endpoints
//! - [`latest_temperature()`] - pick the freshest temperature off a device list

pub mod client;
pub mod commands;
pub mod models;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use client::{AirconApi, RemoClient, BASE_URL};
pub use commands::{AirconSetting, BUTTON_POWER_OFF, BUTTON_POWER_ON, BUTTON_SWING};
pub use models::{latest_temperature, Appliance, Device};
