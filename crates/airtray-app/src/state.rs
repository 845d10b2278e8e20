//! State store: the single owned snapshot and its mutation API

use airtray_core::{AcState, ApplianceSnapshot};

/// One atomic mutation of the store.
///
/// Every legal way the snapshot can change is a variant here; there is no
/// field-by-field mutation path, so a patch is either fully applied or
/// not at all. In particular an [`StatePatch::Appliance`] patch moves all
/// four settings fields and the capability map together — a torn read
/// mixing two polls cannot be constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum StatePatch {
    /// Device poll result.
    Reading { current_temperature: f64 },
    /// Appliance poll result, applied wholesale.
    Appliance(ApplianceSnapshot),
    /// Optimistic single-field patches from user commands.
    Power(bool),
    Mode(String),
    SettingTemperature(String),
    Volume(String),
}

/// Owns the in-memory [`AcState`].
///
/// All reads and mutations happen on the engine's single logical task;
/// other threads reach the store only through the message channel. The
/// version counter increments on every mutation and is how the engine
/// detects that a render is due.
#[derive(Debug, Default)]
pub struct Store {
    state: AcState,
    version: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot, by value. Callers get their own copy; mutating
    /// it does not touch the store.
    pub fn read(&self) -> AcState {
        self.state.clone()
    }

    /// Borrowed view for decision-making inside the update loop.
    pub fn state(&self) -> &AcState {
        &self.state
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply one atomic patch. The only way state changes.
    pub fn mutate(&mut self, patch: StatePatch) {
        match patch {
            StatePatch::Reading {
                current_temperature,
            } => {
                self.state.current_temperature = Some(current_temperature);
            }
            StatePatch::Appliance(snapshot) => {
                self.state.modes = snapshot.modes;
                self.state.power = snapshot.settings.power;
                self.state.mode = snapshot.settings.mode;
                self.state.setting_temperature = snapshot.settings.setting_temperature;
                self.state.volume = snapshot.settings.volume;
            }
            StatePatch::Power(power) => self.state.power = power,
            StatePatch::Mode(mode) => self.state.mode = Some(mode),
            StatePatch::SettingTemperature(temperature) => {
                self.state.setting_temperature = Some(temperature);
            }
            StatePatch::Volume(volume) => self.state.volume = Some(volume),
        }
        self.version += 1;
    }
}
