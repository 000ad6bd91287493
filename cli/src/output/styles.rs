//! Colour palette for terminal output.
//!
//! Every field defaults to an unstyled `Style`, so a `Styles::default()`
//! renders plain text for pipes and `NO_COLOR`.

use owo_colors::Style;
use rhdh_common::ServiceState;

#[derive(Default, Clone)]
pub struct Styles {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub info: Style,
    /// Secondary detail such as container ids and uptimes.
    pub dim: Style,
    pub bold: Style,
    /// Section titles ("Services:", "Settings (...)").
    pub header: Style,
}

impl Styles {
    /// Switch from plain text to the coloured palette.
    pub fn colorize(&mut self) {
        *self = Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            info: Style::new().blue(),
            dim: Style::new().dimmed(),
            bold: Style::new().bold(),
            header: Style::new().bold().cyan(),
        };
    }

    /// Colour for a container state in the services table.
    #[must_use]
    pub fn for_state(&self, state: ServiceState) -> Style {
        match state {
            ServiceState::Running => self.success,
            ServiceState::Error => self.error,
            ServiceState::Unknown => self.warning,
            ServiceState::Stopped => self.dim,
        }
    }
}
