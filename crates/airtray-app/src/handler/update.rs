//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, warn};

use airtray_api::AirconSetting;

use crate::message::Message;
use crate::state::{StatePatch, Store};

use super::{UpdateAction, UpdateResult};

/// Process a message and update state
///
/// Pure with respect to I/O: mutations go through the store, side
/// effects come back as an [`UpdateAction`] for the engine to execute.
pub fn update(store: &mut Store, message: Message) -> UpdateResult {
    match message {
        Message::Poll => UpdateResult::action(UpdateAction::Poll),

        // ─────────────────────────────────────────────────────────
        // Fetch Completions (reconciliation)
        // ─────────────────────────────────────────────────────────
        Message::ReadingFetched(reading) => {
            match reading.current_temperature {
                Some(value) => store.mutate(StatePatch::Reading {
                    current_temperature: value,
                }),
                // No paired sensor carried a temperature event; the
                // previous reading stands.
                None => debug!("device poll carried no temperature event"),
            }
            UpdateResult::none()
        }

        Message::ApplianceFetched(snapshot) => {
            // One atomic patch: capability map and all four settings
            // fields move together.
            store.mutate(StatePatch::Appliance(snapshot));
            UpdateResult::none()
        }

        Message::ApplianceMissing => {
            debug!("target appliance absent from poll response; keeping previous state");
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // User Commands (optimistic patch + remote write)
        // ─────────────────────────────────────────────────────────
        Message::SetPower(power) => {
            store.mutate(StatePatch::Power(power));
            UpdateResult::action(UpdateAction::SendSetting(AirconSetting::Power(power)))
        }

        Message::SetMode(mode) => {
            store.mutate(StatePatch::Mode(mode.clone()));
            UpdateResult::action(UpdateAction::SendSetting(AirconSetting::Mode(mode)))
        }

        Message::SetTemperature(temperature) => {
            store.mutate(StatePatch::SettingTemperature(temperature.clone()));
            UpdateResult::action(UpdateAction::SendSetting(AirconSetting::Temperature(
                temperature,
            )))
        }

        Message::SetVolume(volume) => {
            store.mutate(StatePatch::Volume(volume.clone()));
            UpdateResult::action(UpdateAction::SendSetting(AirconSetting::Volume(volume)))
        }

        Message::Swing => {
            // Stateless: nothing to patch, nothing to reconcile.
            UpdateResult::action(UpdateAction::SendSetting(AirconSetting::Swing))
        }

        // ─────────────────────────────────────────────────────────
        // Command Completions (per-action reconciliation)
        // ─────────────────────────────────────────────────────────
        Message::CommandSent(setting) => match setting {
            // A mode change shifts the legal temperature/volume sets, so
            // only a fresh fetch can restore the range invariants.
            AirconSetting::Mode(_) => UpdateResult::action(UpdateAction::FetchAppliance),
            AirconSetting::Swing => UpdateResult::none(),
            // Power/temperature/volume trust their optimistic value.
            _ => UpdateResult::action(UpdateAction::Render),
        },

        Message::CommandFailed { setting, error } => {
            // No rollback: the next poll overwrites the optimistic value
            // with remote truth within one interval.
            warn!("write {} failed: {error}", setting.describe());
            UpdateResult::none()
        }

        Message::Quit => {
            debug!("quit requested");
            UpdateResult::action(UpdateAction::Quit)
        }
    }
}
