use crate::ui::mvi::UiState;
use crate::window::Orientation;

/// Which composition the screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenState {
    /// Portrait, nothing selected: list fills the body.
    #[default]
    PortraitList,
    /// Portrait with a selection: detail fills the body.
    PortraitDetail,
    /// List and detail side by side.
    Landscape,
}

impl UiState for ScreenState {}

/// Visible panes for a [`ScreenState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panes {
    pub list: bool,
    pub detail: bool,
}

impl ScreenState {
    pub fn resolve(orientation: Orientation, has_selection: bool) -> Self {
        match (orientation, has_selection) {
            (Orientation::Landscape, _) => ScreenState::Landscape,
            (Orientation::Portrait, false) => ScreenState::PortraitList,
            (Orientation::Portrait, true) => ScreenState::PortraitDetail,
        }
    }

    pub fn orientation(self) -> Orientation {
        match self {
            ScreenState::PortraitList | ScreenState::PortraitDetail => Orientation::Portrait,
            ScreenState::Landscape => Orientation::Landscape,
        }
    }

    pub fn panes(self) -> Panes {
        match self {
            ScreenState::PortraitList => Panes {
                list: true,
                detail: false,
            },
            ScreenState::PortraitDetail => Panes {
                list: false,
                detail: true,
            },
            ScreenState::Landscape => Panes {
                list: true,
                detail: true,
            },
        }
    }

    pub fn is_dual_pane(self) -> bool {
        self == ScreenState::Landscape
    }
}
