//! # airtray-app - State Synchronization and Command Dispatch
//!
//! The TEA-style core of airtray: a single owned [`Store`], a [`Message`]
//! enum every input funnels through, a pure [`handler::update`] function,
//! and an [`Engine`] that drives the periodic poll and executes side
//! effects against an [`airtray_api::AirconApi`].
//!
//! Commands apply optimistically: the store patch lands (and renders)
//! before the remote write is confirmed, and a failed write is corrected
//! by the next poll rather than rolled back.

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod indicator;
pub mod message;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::Config;
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use indicator::Indicator;
pub use message::Message;
pub use state::{StatePatch, Store};
