//! State for the user list screen.

use crate::model::User;
use crate::ui::mvi::UiState;

/// Everything the user list view renders.
///
/// `users` holds either the full collection or, while `search_query` is
/// non-blank, the subset of the previously held users that match it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserListState {
    pub is_loading: bool,
    pub users: Vec<User>,
    /// Name input.
    pub name: String,
    /// Email input.
    pub email: String,
    pub name_error: bool,
    pub email_error: bool,
    pub search_query: String,
    /// Last deleted user, kept for a single-level undo.
    pub recently_deleted: Option<User>,
}

impl UiState for UserListState {}

impl UserListState {
    pub fn is_filtered(&self) -> bool {
        !self.search_query.trim().is_empty()
    }

    pub fn has_input_errors(&self) -> bool {
        self.name_error || self.email_error
    }

    pub fn can_undo(&self) -> bool {
        self.recently_deleted.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let state = UserListState::default();
        assert!(!state.is_loading);
        assert!(state.users.is_empty());
        assert!(state.name.is_empty());
        assert!(state.email.is_empty());
        assert!(!state.has_input_errors());
        assert!(!state.is_filtered());
        assert!(!state.can_undo());
    }

    #[test]
    fn whitespace_query_is_not_a_filter() {
        let state = UserListState {
            search_query: "   ".into(),
            ..Default::default()
        };
        assert!(!state.is_filtered());
    }
}
