/// Marker trait for UI state objects.
///
/// States are replaced wholesale (`Clone`), compared to detect changes
/// (`PartialEq`, used as the derived-view cache key), and have a `Default`
/// so the app can move them out while reducing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
