//! Selected-product state and its restoration contract.
//!
//! ```text
//! List view ──select──┐                 ┌──► subscribers (screen, redraw)
//!                     ├──► SelectionStore
//! Detail view ─clear──┘                 └──► serialize ──► StateBackend
//! ```

mod backend;
mod saver;
mod store;

pub use backend::{
    persist_selection, restore_selection, FileStateBackend, MemoryStateBackend, StateBackend,
    StateError,
};
pub use saver::{deserialize, serialize, validate_fields, Primitive, SerializedForm, ShapeError};
pub use store::{SelectionStore, SubscriptionId};
