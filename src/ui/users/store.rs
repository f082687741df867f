//! Intent handler for the user list screen.
//!
//! The store owns the state, the sending half of the effect channel and a
//! handle to the repository. Handling an intent may await the repository;
//! every state change in between is published as a complete snapshot.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::model::{is_valid_email, is_valid_name, User};
use crate::repository::{RepositoryError, UserRepository};
use crate::ui::mvi::Reducer;

use super::effect::{EffectStream, UserEffect, UNDO_ACTION};
use super::intent::UserIntent;
use super::mutation::UserListMutation;
use super::reducer::UserListReducer;
use super::state::UserListState;

pub const USERS_LOADED: &str = "Users loaded";
pub const NO_USERS_AVAILABLE: &str = "No users available";
pub const USER_ADDED: &str = "User added successfully!";
pub const USER_DELETED: &str = "User deleted";
pub const USERS_CLEARED: &str = "All users cleared!";
pub const NO_USERS_FOUND: &str = "No users found";

pub struct UserListStore {
    repository: Arc<dyn UserRepository>,
    state: watch::Sender<UserListState>,
    effects: mpsc::UnboundedSender<UserEffect>,
}

impl UserListStore {
    /// Create a store with default state and the single effect consumer.
    pub fn new(repository: Arc<dyn UserRepository>) -> (Self, EffectStream) {
        let (state, _) = watch::channel(UserListState::default());
        let (effects, receiver) = mpsc::unbounded_channel();
        let store = Self {
            repository,
            state,
            effects,
        };
        (store, EffectStream::new(receiver))
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> UserListState {
        self.state.borrow().clone()
    }

    /// Observe state snapshots.
    pub fn subscribe(&self) -> watch::Receiver<UserListState> {
        self.state.subscribe()
    }

    /// Handle one intent to completion.
    pub async fn handle(&self, intent: UserIntent) {
        tracing::debug!(intent = intent.kind(), "Handling intent");

        match intent {
            UserIntent::LoadUsers => self.load_users().await,
            UserIntent::AddUser { name, email } => self.add_user(name, email).await,
            UserIntent::DeleteUser { user } => self.delete_user(user).await,
            UserIntent::ClearUsers => self.clear_users().await,
            UserIntent::SearchUsers { query } => self.search_users(query).await,
            UserIntent::UpdateName { name } => self.apply(UserListMutation::NameChanged { name }),
            UserIntent::UpdateEmail { email } => {
                self.apply(UserListMutation::EmailChanged { email })
            }
            UserIntent::UndoDelete => self.undo_delete().await,
        }
    }

    async fn load_users(&self) {
        self.apply(UserListMutation::LoadStarted);
        match self.repository.list().await {
            Ok(users) => {
                let message = if users.is_empty() {
                    NO_USERS_AVAILABLE
                } else {
                    USERS_LOADED
                };
                tracing::debug!(count = users.len(), "Users loaded");
                self.apply(UserListMutation::LoadFinished { users });
                self.emit(UserEffect::message(message));
            }
            Err(e) => self.fail("load users", &e, e.user_message().to_string()),
        }
    }

    async fn add_user(&self, name: String, email: String) {
        let name_error = !is_valid_name(&name);
        let email_error = !is_valid_email(&email);
        if name_error || email_error {
            tracing::debug!(name_error, email_error, "Rejected user input");
            self.apply(UserListMutation::ValidationFailed {
                name_error,
                email_error,
            });
            return;
        }

        self.apply(UserListMutation::ValidationPassed);
        self.apply(UserListMutation::LoadStarted);

        let user = User::with_random_id(name, email);
        let id = user.id;
        match self.repository.add(user).await {
            Ok(users) => {
                tracing::info!(id, "User added");
                self.apply(UserListMutation::UserAdded { users });
                self.emit(UserEffect::message(USER_ADDED));
            }
            Err(e) => self.fail(
                "add user",
                &e,
                format!("Error adding user: {}", e.user_message()),
            ),
        }
    }

    async fn delete_user(&self, user: User) {
        // Kept even if the removal below fails.
        self.apply(UserListMutation::Remembered { user: user.clone() });
        self.apply(UserListMutation::LoadStarted);

        match self.repository.remove(&user).await {
            Ok(users) => {
                tracing::info!(id = user.id, "User deleted");
                self.apply(UserListMutation::LoadFinished { users });
                self.emit(UserEffect::with_action(USER_DELETED, UNDO_ACTION));
            }
            Err(e) => self.fail(
                "delete user",
                &e,
                format!("Error deleting user: {}", e.user_message()),
            ),
        }
    }

    async fn clear_users(&self) {
        self.apply(UserListMutation::LoadStarted);
        match self.repository.clear().await {
            Ok(users) => {
                tracing::info!("Users cleared");
                self.apply(UserListMutation::LoadFinished { users });
                self.emit(UserEffect::message(USERS_CLEARED));
            }
            Err(e) => self.fail(
                "clear users",
                &e,
                format!("Error clearing users: {}", e.user_message()),
            ),
        }
    }

    async fn search_users(&self, query: String) {
        self.apply(UserListMutation::SearchQueryChanged {
            query: query.clone(),
        });

        if query.trim().is_empty() {
            // The filtered view cannot be inverted; reload the collection.
            match self.repository.list().await {
                Ok(users) => self.apply(UserListMutation::UsersReplaced { users }),
                Err(e) => self.fail("reload users", &e, e.user_message().to_string()),
            }
            return;
        }

        let filtered: Vec<User> = self
            .state
            .borrow()
            .users
            .iter()
            .filter(|user| user.matches_query(&query))
            .cloned()
            .collect();
        let found = !filtered.is_empty();
        self.apply(UserListMutation::UsersReplaced { users: filtered });
        if !found {
            self.emit(UserEffect::message(NO_USERS_FOUND));
        }
    }

    async fn undo_delete(&self) {
        let remembered = self.state.borrow().recently_deleted.clone();
        let Some(user) = remembered else {
            tracing::debug!("Nothing to undo");
            return;
        };
        // Re-adding assigns a new id.
        self.add_user(user.name, user.email).await;
        self.apply(UserListMutation::Forgotten);
    }

    fn fail(&self, operation: &str, error: &RepositoryError, message: String) {
        tracing::warn!(operation, error = %error, "Repository operation failed");
        self.apply(UserListMutation::LoadFailed);
        self.emit(UserEffect::message(message));
    }

    fn apply(&self, mutation: UserListMutation) {
        let current = self.state.borrow().clone();
        self.state
            .send_replace(UserListReducer::reduce(current, mutation));
    }

    fn emit(&self, effect: UserEffect) {
        if self.effects.send(effect).is_err() {
            tracing::trace!("Effect dropped (receiver gone)");
        }
    }
}
