//! In-memory repository with simulated latency.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{RepositoryError, UserRepository};
use crate::config::RepositoryConfig;
use crate::model::User;

/// Artificial delays applied before each operation completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    /// Delay for `list`.
    pub list: Duration,
    /// Delay for `add`, `remove` and `clear`.
    pub mutation: Duration,
}

impl Latency {
    pub const fn none() -> Self {
        Self {
            list: Duration::ZERO,
            mutation: Duration::ZERO,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(1000),
            mutation: Duration::from_millis(500),
        }
    }
}

impl From<&RepositoryConfig> for Latency {
    fn from(config: &RepositoryConfig) -> Self {
        Self {
            list: Duration::from_millis(config.list_delay_ms),
            mutation: Duration::from_millis(config.mutation_delay_ms),
        }
    }
}

/// Repository keeping users in an owned, lock-protected vector.
///
/// Cloning yields another handle to the same collection.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
    latency: Latency,
}

impl InMemoryUserRepository {
    pub fn new(latency: Latency) -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
            latency,
        }
    }

    pub fn with_users(latency: Latency, users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            latency,
        }
    }

    /// Build a repository from config, seeding it with fresh random ids.
    pub fn from_config(config: &RepositoryConfig) -> Self {
        let seed = config
            .seed
            .iter()
            .map(|entry| User::with_random_id(entry.name.clone(), entry.email.clone()))
            .collect();
        Self::with_users(Latency::from(config), seed)
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    /// Current contents without any delay.
    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().clone()
    }

    async fn pause(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        Self::pause(self.latency.list).await;
        Ok(self.snapshot())
    }

    async fn add(&self, user: User) -> Result<Vec<User>, RepositoryError> {
        Self::pause(self.latency.mutation).await;
        let mut users = self.users.lock();
        users.push(user);
        Ok(users.clone())
    }

    async fn remove(&self, user: &User) -> Result<Vec<User>, RepositoryError> {
        Self::pause(self.latency.mutation).await;
        let mut users = self.users.lock();
        if let Some(index) = users.iter().position(|candidate| candidate == user) {
            users.remove(index);
        }
        Ok(users.clone())
    }

    async fn clear(&self) -> Result<Vec<User>, RepositoryError> {
        Self::pause(self.latency.mutation).await;
        let mut users = self.users.lock();
        users.clear();
        Ok(users.clone())
    }
}
