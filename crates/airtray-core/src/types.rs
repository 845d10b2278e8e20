//! Domain types for the cached appliance view
//!
//! These are the in-memory types the rest of the application works with.
//! Wire payloads live in `airtray-api` and are converted into these on the
//! way in; nothing here knows about JSON or HTTP.

use std::collections::BTreeMap;

/// Legal settings for one operating mode of the appliance.
///
/// Both option lists keep the service's ordering — the menu renders them
/// in the order the appliance reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeRange {
    /// Valid set-temperature tokens for this mode (e.g. `"16"`..`"30"`).
    pub temperature_options: Vec<String>,
    /// Valid air-volume tokens for this mode (e.g. `"1"`, `"2"`, `"auto"`).
    pub volume_options: Vec<String>,
}

/// Capability map: mode name to its legal option sets.
///
/// Ordered so that menu rendering is stable across polls.
pub type Modes = BTreeMap<String, ModeRange>;

/// Latest sensor reading from the appliance's paired device.
///
/// Replaced wholesale on each poll; `None` means the device list carried
/// no temperature event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DeviceReading {
    pub current_temperature: Option<f64>,
}

/// The appliance's last known committed configuration as reported by the
/// remote service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplianceSettings {
    /// Derived from the service's `button` sentinel: empty string means on.
    pub power: bool,
    pub mode: Option<String>,
    pub setting_temperature: Option<String>,
    pub volume: Option<String>,
}

/// One successful appliance poll: capabilities plus settings.
///
/// This is the atomic unit the store applies — the four settings fields
/// never update separately, so a reader can never observe `mode` from one
/// poll next to `setting_temperature` from another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplianceSnapshot {
    pub modes: Modes,
    pub settings: ApplianceSettings,
}

/// The single in-memory view of device + appliance state.
///
/// Created empty at startup and refined by polls and optimistic command
/// patches for the process lifetime. Invariants: `mode`, when set, is a
/// key of `modes`; `setting_temperature` belongs to the active mode's
/// range once `modes` is non-empty. Optimistic patches may violate the
/// second one transiently — the next reconciliation corrects it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcState {
    pub modes: Modes,
    pub current_temperature: Option<f64>,
    pub power: bool,
    pub mode: Option<String>,
    pub setting_temperature: Option<String>,
    pub volume: Option<String>,
}

impl AcState {
    /// The option sets of the currently selected mode, if the mode is
    /// known to the capability map.
    pub fn active_range(&self) -> Option<&ModeRange> {
        self.mode.as_ref().and_then(|m| self.modes.get(m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modes_with(name: &str) -> Modes {
        let mut modes = Modes::new();
        modes.insert(
            name.to_string(),
            ModeRange {
                temperature_options: vec!["20".into(), "22".into()],
                volume_options: vec!["1".into(), "3".into()],
            },
        );
        modes
    }

    #[test]
    fn test_active_range_for_known_mode() {
        let state = AcState {
            modes: modes_with("auto"),
            mode: Some("auto".to_string()),
            ..Default::default()
        };

        let range = state.active_range().expect("range for auto");
        assert_eq!(range.temperature_options, vec!["20", "22"]);
    }

    #[test]
    fn test_active_range_absent_when_mode_unknown() {
        let state = AcState {
            modes: modes_with("auto"),
            mode: Some("cool".to_string()),
            ..Default::default()
        };

        assert!(state.active_range().is_none());
    }

    #[test]
    fn test_active_range_absent_when_mode_unset() {
        let state = AcState {
            modes: modes_with("auto"),
            ..Default::default()
        };

        assert!(state.active_range().is_none());
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = AcState::default();
        assert!(state.modes.is_empty());
        assert!(state.current_temperature.is_none());
        assert!(!state.power);
        assert!(state.mode.is_none());
        assert!(state.setting_temperature.is_none());
        assert!(state.volume.is_none());
    }
}
