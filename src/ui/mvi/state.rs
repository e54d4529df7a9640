/// Marker trait for reducer-owned UI state.
///
/// Values are replaced, never patched in place; `PartialEq` lets callers
/// detect transitions and `Default` supplies the starting state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
