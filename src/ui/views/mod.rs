mod detail;
mod list;

pub use detail::{DetailView, CLEAR_BUTTON_LABEL, EMPTY_MESSAGE};
pub use list::ProductListView;
