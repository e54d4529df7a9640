use crate::ui::mvi::Reducer;
use crate::ui::screen::intent::ScreenIntent;
use crate::ui::screen::state::ScreenState;

pub struct ScreenReducer;

impl Reducer for ScreenReducer {
    type State = ScreenState;
    type Intent = ScreenIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScreenIntent::OrientationChanged {
                orientation,
                has_selection,
            } => ScreenState::resolve(orientation, has_selection),
            ScreenIntent::SelectionChanged { has_selection } => match state {
                // Both panes stay mounted; only the detail content changes.
                ScreenState::Landscape => ScreenState::Landscape,
                ScreenState::PortraitList | ScreenState::PortraitDetail => {
                    ScreenState::resolve(state.orientation(), has_selection)
                }
            },
        }
    }
}
