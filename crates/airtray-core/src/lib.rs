//! # airtray-core - Domain Types for airtray
//!
//! Core vocabulary shared by every other crate: the cached appliance view,
//! the error taxonomy, display-label lookup, and the logging bootstrap.
//! No I/O happens here.
//!
//! ## Public API
//!
//! ### Domain Model
//! - [`AcState`] - the single in-memory view of device + appliance state
//! - [`ApplianceSnapshot`] - one successful appliance poll (capabilities + settings)
//! - [`ApplianceSettings`], [`ModeRange`], [`Modes`], [`DeviceReading`]
//!
//! ### Errors
//! - [`Error`], [`Result`] - thiserror taxonomy; absent entities are `Ok(None)`, not errors
//!
//! ### Presentation helpers
//! - [`display_label()`] - fixed token → label table with verbatim fallback

pub mod error;
pub mod labels;
pub mod logging;
pub mod prelude;
pub mod types;

// Public API re-exports
pub use error::{Error, Result};
pub use labels::display_label;
pub use types::{AcState, ApplianceSettings, ApplianceSnapshot, DeviceReading, ModeRange, Modes};
