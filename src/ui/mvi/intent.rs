/// Marker trait for intents.
///
/// Intents are either host signals (resize, rotation) or user actions
/// (select, clear) and are consumed by a [`Reducer`](super::Reducer).
pub trait Intent: Send + 'static {}
