//! Tray model: title string and hierarchical menu description
//!
//! A pure projection of [`AcState`] — no widget toolkit here. Every
//! actionable entry carries the [`Message`] it dispatches, so any
//! frontend (OS tray, status line, tests) can bind selections to the
//! engine's channel without knowing the command semantics.

use airtray_app::Message;
use airtray_core::{display_label, AcState, ModeRange};

/// What a presentation surface renders: one line of text plus a menu.
#[derive(Debug, Clone, PartialEq)]
pub struct TrayModel {
    pub title: String,
    pub items: Vec<MenuItem>,
}

/// One entry of the hierarchical menu.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuItem {
    /// Clickable entry bound to the message it dispatches. Disabled
    /// entries mark the currently selected value.
    Action {
        label: String,
        enabled: bool,
        message: Message,
    },
    Submenu {
        label: String,
        items: Vec<MenuItem>,
    },
    Separator,
}

impl MenuItem {
    fn action(label: impl Into<String>, enabled: bool, message: Message) -> Self {
        MenuItem::Action {
            label: label.into(),
            enabled,
            message,
        }
    }
}

impl TrayModel {
    /// Project the snapshot into a renderable model.
    pub fn from_state(state: &AcState) -> Self {
        Self {
            title: title(state),
            items: menu(state),
        }
    }
}

/// Short display string: power indicator, current temperature, and —
/// only while powered on — mode, set temperature and volume labels.
fn title(state: &AcState) -> String {
    let mut parts = Vec::new();

    if state.power {
        parts.push("[運転中]".to_string());
    }

    match state.current_temperature {
        Some(temperature) => parts.push(format!("気温:{temperature}")),
        None => parts.push("気温:-".to_string()),
    }

    if state.power {
        if let Some(mode) = &state.mode {
            parts.push(display_label(mode).to_string());
        }
        if let Some(temperature) = &state.setting_temperature {
            parts.push(format!("設定温度:{}", display_label(temperature)));
        }
        if let Some(volume) = &state.volume {
            parts.push(format!("風量:{}", display_label(volume)));
        }
    }

    parts.join(" ")
}

fn menu(state: &AcState) -> Vec<MenuItem> {
    let mut items = Vec::new();

    items.push(if state.power {
        MenuItem::action("電源OFF", true, Message::SetPower(false))
    } else {
        MenuItem::action("電源ON", true, Message::SetPower(true))
    });

    if state.power {
        items.push(MenuItem::Separator);
        items.push(MenuItem::Submenu {
            label: "モード".to_string(),
            items: mode_items(state),
        });

        // Option submenus need the active mode's ranges; with an unknown
        // or unset mode there is nothing legal to offer yet.
        if let Some(range) = state.active_range() {
            items.push(MenuItem::Submenu {
                label: "設定温度".to_string(),
                items: temperature_items(state, range),
            });
            items.push(MenuItem::Submenu {
                label: "風量".to_string(),
                items: volume_items(state, range),
            });
        }

        items.push(MenuItem::action("ふりふり", true, Message::Swing));
    }

    items.push(MenuItem::Separator);
    items.push(MenuItem::action("終了", true, Message::Quit));

    items
}

fn mode_items(state: &AcState) -> Vec<MenuItem> {
    state
        .modes
        .keys()
        .map(|mode| {
            MenuItem::action(
                display_label(mode),
                state.mode.as_deref() != Some(mode.as_str()),
                Message::SetMode(mode.clone()),
            )
        })
        .collect()
}

fn temperature_items(state: &AcState, range: &ModeRange) -> Vec<MenuItem> {
    range
        .temperature_options
        .iter()
        .map(|temperature| {
            MenuItem::action(
                display_label(temperature),
                state.setting_temperature.as_deref() != Some(temperature.as_str()),
                Message::SetTemperature(temperature.clone()),
            )
        })
        .collect()
}

fn volume_items(state: &AcState, range: &ModeRange) -> Vec<MenuItem> {
    range
        .volume_options
        .iter()
        .map(|volume| {
            MenuItem::action(
                display_label(volume),
                state.volume.as_deref() != Some(volume.as_str()),
                Message::SetVolume(volume.clone()),
            )
        })
        .collect()
}
