//! One-shot effects emitted by the user list store.

use tokio::sync::mpsc;

use crate::ui::mvi::Effect;

/// Action label attached to the "User deleted" snackbar.
pub const UNDO_ACTION: &str = "Undo";

/// Transient feedback for the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEffect {
    /// Show a short message, optionally with a single action button.
    ShowSnackbar {
        message: String,
        action_label: Option<String>,
    },
}

impl Effect for UserEffect {}

impl UserEffect {
    pub fn message(message: impl Into<String>) -> Self {
        UserEffect::ShowSnackbar {
            message: message.into(),
            action_label: None,
        }
    }

    pub fn with_action(message: impl Into<String>, action_label: impl Into<String>) -> Self {
        UserEffect::ShowSnackbar {
            message: message.into(),
            action_label: Some(action_label.into()),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            UserEffect::ShowSnackbar { message, .. } => message,
        }
    }

    pub fn action_label(&self) -> Option<&str> {
        match self {
            UserEffect::ShowSnackbar { action_label, .. } => action_label.as_deref(),
        }
    }

    /// True when invoking the action should dispatch `UndoDelete`.
    pub fn is_undo_action(&self) -> bool {
        self.action_label() == Some(UNDO_ACTION)
    }
}

/// Receiving end of the effect channel.
///
/// There is exactly one consumer. Effects arrive in emission order and are
/// gone once taken.
pub struct EffectStream {
    receiver: mpsc::UnboundedReceiver<UserEffect>,
}

impl EffectStream {
    pub(crate) fn new(receiver: mpsc::UnboundedReceiver<UserEffect>) -> Self {
        Self { receiver }
    }

    /// Wait for the next effect. Returns `None` once the store is gone and
    /// every pending effect has been taken.
    pub async fn next(&mut self) -> Option<UserEffect> {
        self.receiver.recv().await
    }

    /// Take the next pending effect without waiting.
    pub fn try_next(&mut self) -> Option<UserEffect> {
        self.receiver.try_recv().ok()
    }

    /// Take every pending effect without waiting.
    pub fn drain(&mut self) -> Vec<UserEffect> {
        let mut effects = Vec::new();
        while let Some(effect) = self.try_next() {
            effects.push(effect);
        }
        effects
    }
}
