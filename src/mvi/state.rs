//! Base trait for component state.

/// Marker trait for state objects.
///
/// A state value is a complete snapshot: everything the view needs to draw,
/// comparable so changes can be detected, and `Default` so a component can
/// start inert before activation.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
