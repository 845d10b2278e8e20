//! Handler module - TEA update function
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch

pub(crate) mod update;


use airtray_api::AirconSetting;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Run a full poll cycle: device fetch and appliance fetch,
    /// concurrently, each feeding its completion back as a message
    Poll,

    /// Re-fetch appliance state only (post-write reconciliation after a
    /// mode change — the new mode may carry different option sets)
    FetchAppliance,

    /// Post one settings field to the service
    SendSetting(AirconSetting),

    /// Re-render without a state change (post-write confirmation for
    /// writes that trust their optimistic value)
    Render,

    /// Stop the engine loop
    Quit,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
