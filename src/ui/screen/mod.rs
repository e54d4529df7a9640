//! Adaptive layout controller.
//!
//! [`ScreenReducer`] is the orientation/selection state machine;
//! [`AdaptiveScreen`] owns the selection store and drives the views.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{AdaptiveScreen, PaneFocus};
pub use intent::ScreenIntent;
pub use reducer::ScreenReducer;
pub use state::{Panes, ScreenState};
