use crate::ui::mvi::Intent;
use crate::window::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenIntent {
    /// Host reported a (possibly unchanged) orientation.
    OrientationChanged {
        orientation: Orientation,
        has_selection: bool,
    },
    /// The selection store was written.
    SelectionChanged { has_selection: bool },
}

impl Intent for ScreenIntent {}
