//! Render-target contract
//!
//! The OS widget itself lives outside this crate; anything that can show
//! a title and a menu implements this and gets called with a fresh
//! snapshot after every store mutation.

use airtray_core::AcState;

/// A presentation surface fed by the engine.
///
/// Must be `Send` — the engine may run on any runtime worker thread.
pub trait Indicator: Send {
    /// Called after every store mutation with the new snapshot.
    fn render(&mut self, state: &AcState);
}
