/// Marker for feature state.
///
/// `Default` is the state at mount; `PartialEq` lets tests and the render
/// loop compare snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
