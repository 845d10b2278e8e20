//! Common imports for airtray crates

pub use crate::error::{Error, Result};
