//! Base trait for intents (user actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent discrete user actions (typing, pressing a button,
/// confirming an undo) and form a closed set per screen. They are handled
/// by a store, which may consult a data source before reducing state.
pub trait Intent: Send + 'static {}
