//! Wire payloads of the remote service
//!
//! Shapes follow the cloud API's JSON bodies; unknown fields are ignored
//! so capability additions on the service side do not break parsing.
//! Conversion into the domain types of [`airtray_core`] happens here, on
//! the way in.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use airtray_core::{ApplianceSettings, ApplianceSnapshot, ModeRange, Modes};

/// Event key carrying the ambient temperature reading.
pub const TEMPERATURE_EVENT: &str = "te";

/// A device entry from `GET /devices`.
///
/// Each device reports its freshest sensor events keyed by event type
/// (`te` temperature, `hu` humidity, `il` illumination).
#[derive(Debug, Clone, Deserialize)]
pub struct Device {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub newest_events: HashMap<String, SensorEvent>,
}

/// One sensor event value with its capture time.
#[derive(Debug, Clone, Deserialize)]
pub struct SensorEvent {
    pub val: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// An appliance entry from `GET /appliances`.
///
/// Non-aircon appliances (lights, IR blobs) appear in the same list with
/// the `aircon` block absent.
#[derive(Debug, Clone, Deserialize)]
pub struct Appliance {
    pub id: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub aircon: Option<Aircon>,
    #[serde(default)]
    pub settings: Option<AirconSettingsPayload>,
}

/// Aircon capability block.
#[derive(Debug, Clone, Deserialize)]
pub struct Aircon {
    pub range: AirconRange,
}

/// Capability map as the service reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct AirconRange {
    #[serde(default)]
    pub modes: BTreeMap<String, AirconModeRange>,
}

/// Option sets for one mode. The wire names are abbreviated.
#[derive(Debug, Clone, Deserialize)]
pub struct AirconModeRange {
    #[serde(default)]
    pub temp: Vec<String>,
    #[serde(default)]
    pub vol: Vec<String>,
}

/// Current committed settings as the service reports them.
///
/// `button` is a sentinel: empty string means the appliance is powered on,
/// anything else (`"power-off"`) means off.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AirconSettingsPayload {
    #[serde(default)]
    pub temp: String,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub vol: String,
    #[serde(default)]
    pub button: String,
}

impl Appliance {
    /// Convert into the domain snapshot, or `None` when this appliance
    /// carries no aircon data (wrong appliance kind).
    pub fn into_snapshot(self) -> Option<ApplianceSnapshot> {
        let aircon = self.aircon?;
        let settings = self.settings.unwrap_or_default();

        let modes: Modes = aircon
            .range
            .modes
            .into_iter()
            .map(|(name, range)| {
                (
                    name,
                    ModeRange {
                        temperature_options: range.temp,
                        volume_options: range.vol,
                    },
                )
            })
            .collect();

        Some(ApplianceSnapshot {
            modes,
            settings: ApplianceSettings {
                power: settings.button.is_empty(),
                mode: none_if_empty(settings.mode),
                setting_temperature: none_if_empty(settings.temp),
                volume: none_if_empty(settings.vol),
            },
        })
    }
}

/// The freshest temperature across the device list: first device carrying
/// a `te` event wins. `None` when no device has one.
pub fn latest_temperature(devices: &[Device]) -> Option<f64> {
    devices
        .iter()
        .find_map(|d| d.newest_events.get(TEMPERATURE_EVENT))
        .map(|event| event.val)
}

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEVICES_JSON: &str = r#"[
        {
            "id": "device-hub-1",
            "name": "Hallway Hub",
            "newest_events": {}
        },
        {
            "id": "device-remo-1",
            "name": "Living Room Remo",
            "newest_events": {
                "te": { "val": 24.5, "created_at": "2020-11-03T12:51:00Z" },
                "hu": { "val": 48.0, "created_at": "2020-11-03T12:51:00Z" }
            }
        }
    ]"#;

    const APPLIANCE_JSON: &str = r#"{
        "id": "appliance-1",
        "nickname": "Bedroom AC",
        "aircon": {
            "range": {
                "modes": {
                    "cool": { "temp": ["25", "26", "27"], "vol": ["1", "2", "auto"] },
                    "warm": { "temp": ["20", "21"], "vol": ["1", "auto"] }
                }
            }
        },
        "settings": { "temp": "26", "mode": "cool", "vol": "auto", "button": "" }
    }"#;

    #[test]
    fn test_device_list_parses_and_yields_temperature() {
        let devices: Vec<Device> = serde_json::from_str(DEVICES_JSON).unwrap();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[1].name, "Living Room Remo");

        // First device has no `te` event, second one wins.
        assert_eq!(latest_temperature(&devices), Some(24.5));
    }

    #[test]
    fn test_no_temperature_event_yields_none() {
        let devices: Vec<Device> =
            serde_json::from_str(r#"[{ "id": "d", "newest_events": {} }]"#).unwrap();
        assert_eq!(latest_temperature(&devices), None);
        assert_eq!(latest_temperature(&[]), None);
    }

    #[test]
    fn test_appliance_parses_into_snapshot() {
        let appliance: Appliance = serde_json::from_str(APPLIANCE_JSON).unwrap();
        let snapshot = appliance.into_snapshot().expect("aircon appliance");

        assert_eq!(snapshot.modes.len(), 2);
        let cool = &snapshot.modes["cool"];
        assert_eq!(cool.temperature_options, vec!["25", "26", "27"]);
        assert_eq!(cool.volume_options, vec!["1", "2", "auto"]);

        // Empty button sentinel means powered on.
        assert!(snapshot.settings.power);
        assert_eq!(snapshot.settings.mode.as_deref(), Some("cool"));
        assert_eq!(snapshot.settings.setting_temperature.as_deref(), Some("26"));
        assert_eq!(snapshot.settings.volume.as_deref(), Some("auto"));
    }

    #[test]
    fn test_power_off_button_sentinel() {
        let appliance: Appliance = serde_json::from_str(
            r#"{
                "id": "appliance-1",
                "aircon": { "range": { "modes": {} } },
                "settings": { "temp": "", "mode": "", "vol": "", "button": "power-off" }
            }"#,
        )
        .unwrap();

        let snapshot = appliance.into_snapshot().unwrap();
        assert!(!snapshot.settings.power);
        assert_eq!(snapshot.settings.mode, None);
        assert_eq!(snapshot.settings.setting_temperature, None);
        assert_eq!(snapshot.settings.volume, None);
    }

    #[test]
    fn test_non_aircon_appliance_has_no_snapshot() {
        let appliance: Appliance =
            serde_json::from_str(r#"{ "id": "light-1", "nickname": "Ceiling Light" }"#).unwrap();
        assert!(appliance.into_snapshot().is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let devices: Vec<Device> = serde_json::from_str(
            r#"[{
                "id": "d",
                "name": "Remo",
                "firmware_version": "Remo/1.0.62",
                "newest_events": { "te": { "val": 20.0 } }
            }]"#,
        )
        .unwrap();
        assert_eq!(latest_temperature(&devices), Some(20.0));
    }
}
