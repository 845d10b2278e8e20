//! Status-line frontend
//!
//! The default presentation surface: prints the tray title to stdout
//! whenever it changes. Environments with a real tray host can implement
//! [`Indicator`] over the same [`TrayModel`] instead.

use tracing::debug;

use airtray_app::Indicator;
use airtray_core::AcState;

use crate::model::TrayModel;

/// Prints the title line on change; menu structure goes to the debug log.
#[derive(Debug, Default)]
pub struct StatusLineIndicator {
    last_title: Option<String>,
}

impl StatusLineIndicator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Indicator for StatusLineIndicator {
    fn render(&mut self, state: &AcState) {
        let model = TrayModel::from_state(state);

        if self.last_title.as_deref() != Some(model.title.as_str()) {
            println!("{}", model.title);
            self.last_title = Some(model.title);
        }

        debug!("menu rebuilt with {} top-level entries", model.items.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_tracked_across_renders() {
        let mut indicator = StatusLineIndicator::new();
        let state = AcState {
            current_temperature: Some(21.0),
            ..Default::default()
        };

        indicator.render(&state);
        assert_eq!(indicator.last_title.as_deref(), Some("気温:21"));

        // Unchanged snapshot keeps the tracked title stable.
        indicator.render(&state);
        assert_eq!(indicator.last_title.as_deref(), Some("気温:21"));
    }
}
