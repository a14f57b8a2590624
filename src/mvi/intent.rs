//! Base trait for intents (user and system actions).

/// Marker trait for intent objects.
///
/// An intent is one discrete trigger: a key press, a mouse gesture step, a
/// timer firing, a viewport change. Reducers consume intents to produce new
/// states; nothing else mutates state.
pub trait Intent: Send + 'static {}
