//! Backing store abstraction for user records.
//!
//! Every operation returns the entire collection after it completes, not
//! just the change. Implementations are free to fail; the store converts
//! any failure into a transient message for the user.

mod error;
mod memory;

use async_trait::async_trait;

use crate::model::User;

pub use error::{RepositoryError, UNKNOWN_ERROR};
pub use memory::{InMemoryUserRepository, Latency};

/// Data source for the user list.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns the current collection.
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;

    /// Appends `user` and returns the resulting collection.
    async fn add(&self, user: User) -> Result<Vec<User>, RepositoryError>;

    /// Removes the first entry equal to `user`.
    ///
    /// Removing a user that is not present leaves the collection unchanged.
    async fn remove(&self, user: &User) -> Result<Vec<User>, RepositoryError>;

    /// Removes every entry and returns the (empty) collection.
    async fn clear(&self) -> Result<Vec<User>, RepositoryError>;
}
