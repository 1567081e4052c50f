/// Marker for anything a reducer can consume: key presses translated into
/// actions, or completions coming back from background tasks.
pub trait Intent: Send + 'static {}
