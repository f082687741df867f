//! State changes the store applies while handling an intent.

use crate::model::User;

/// A single state transition. Each one is applied by [`UserListReducer`]
/// and published as a whole new snapshot.
///
/// [`UserListReducer`]: super::UserListReducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserListMutation {
    /// A repository call started.
    LoadStarted,
    /// A repository call finished with this collection.
    LoadFinished { users: Vec<User> },
    /// A repository call failed.
    LoadFailed,
    /// Input validation failed; no repository call follows.
    ValidationFailed { name_error: bool, email_error: bool },
    /// Inputs passed validation.
    ValidationPassed,
    /// A user was added; the inputs are reset.
    UserAdded { users: Vec<User> },
    /// Remember a deleted user for undo, replacing any earlier one.
    Remembered { user: User },
    /// Drop the remembered user.
    Forgotten,
    SearchQueryChanged { query: String },
    /// Replace the displayed users without touching the loading flag.
    UsersReplaced { users: Vec<User> },
    NameChanged { name: String },
    EmailChanged { email: String },
}
