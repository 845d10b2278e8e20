//! Message types for the application (TEA pattern)

use airtray_api::AirconSetting;
use airtray_core::{ApplianceSnapshot, DeviceReading};

/// All possible messages/actions in the application
///
/// Everything that can happen — the poll timer, fetch completions, user
/// selections from the menu, command completions, shutdown — enters the
/// engine through this one enum, which is what serializes all store
/// access onto a single logical task.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Periodic poll tick (also sent once at startup)
    Poll,

    // ─────────────────────────────────────────────────────────
    // Fetch Completions
    // ─────────────────────────────────────────────────────────
    /// Device poll finished successfully
    ReadingFetched(DeviceReading),
    /// Appliance poll finished and found the target appliance
    ApplianceFetched(ApplianceSnapshot),
    /// Appliance poll finished but the target appliance was absent;
    /// the previous snapshot stays authoritative
    ApplianceMissing,

    // ─────────────────────────────────────────────────────────
    // User Commands
    // ─────────────────────────────────────────────────────────
    /// Turn the appliance on or off
    SetPower(bool),
    /// Select an operating mode
    SetMode(String),
    /// Select a set-temperature token
    SetTemperature(String),
    /// Select an air-volume token
    SetVolume(String),
    /// Fire the stateless louver-swing action
    Swing,

    // ─────────────────────────────────────────────────────────
    // Command Completions
    // ─────────────────────────────────────────────────────────
    /// A settings write was accepted by the service
    CommandSent(AirconSetting),
    /// A settings write failed; the optimistic value stands until the
    /// next poll corrects it
    CommandFailed {
        setting: AirconSetting,
        error: String,
    },

    /// Shut the engine down (quit menu entry, SIGINT/SIGTERM)
    Quit,
}
