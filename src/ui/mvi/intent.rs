/// Marker trait for intent objects.
///
/// An intent is a user action (a key press on a control, the reset button)
/// expressed as a value. Reducers turn intents into new states.
pub trait Intent: Send + 'static {}
