//! Base trait for one-shot effects in MVI architecture.

/// Marker trait for effect objects.
///
/// Effects are transient notifications for the view (toasts, snackbars).
/// Unlike state they are delivered at most once, in emission order, and
/// are never replayed to late subscribers.
pub trait Effect: Send + 'static {}
