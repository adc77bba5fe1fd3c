//! Base trait for feature state in MVI architecture.

/// Marker trait for feature state objects.
///
/// States should be:
/// - Cheap to clone (Clone to snapshot before a dispatch)
/// - Self-contained (everything the controller needs to decide effects)
/// - Comparable (PartialEq for detecting accepted vs ignored intents)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
