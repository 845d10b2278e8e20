//! # airtray-ui - Presenter
//!
//! Projects the cached appliance state into what a presentation surface
//! needs: a short title string and a hierarchical menu whose entries
//! carry the messages they dispatch. Ships a status-line frontend; an OS
//! tray host would implement [`airtray_app::Indicator`] over the same
//! model.

pub mod model;
pub mod status_line;

// Re-export primary types
pub use model::{MenuItem, TrayModel};
pub use status_line::StatusLineIndicator;
