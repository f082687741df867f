//! Intents for the user list screen.

use crate::model::User;
use crate::ui::mvi::Intent;

/// Every action the view can ask the user list store to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    /// Reload the full collection from the repository.
    LoadUsers,

    /// Validate the inputs and add a new user.
    AddUser { name: String, email: String },

    /// Remove a user, remembering it for a later undo.
    DeleteUser { user: User },

    /// Remove every user.
    ClearUsers,

    /// Filter the displayed users. A blank query reloads the full list.
    SearchUsers { query: String },

    /// The name input changed.
    UpdateName { name: String },

    /// The email input changed.
    UpdateEmail { email: String },

    /// Re-add the most recently deleted user, if any.
    UndoDelete,
}

impl Intent for UserIntent {}

impl UserIntent {
    pub fn add(name: impl Into<String>, email: impl Into<String>) -> Self {
        UserIntent::AddUser {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn search(query: impl Into<String>) -> Self {
        UserIntent::SearchUsers {
            query: query.into(),
        }
    }

    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            UserIntent::LoadUsers => "load_users",
            UserIntent::AddUser { .. } => "add_user",
            UserIntent::DeleteUser { .. } => "delete_user",
            UserIntent::ClearUsers => "clear_users",
            UserIntent::SearchUsers { .. } => "search_users",
            UserIntent::UpdateName { .. } => "update_name",
            UserIntent::UpdateEmail { .. } => "update_email",
            UserIntent::UndoDelete => "undo_delete",
        }
    }
}
