//! Repository double that can be told to fail.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use userlist::model::User;
use userlist::repository::{InMemoryUserRepository, Latency, RepositoryError, UserRepository};

/// Which operation a [`FlakyRepository`] should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Add,
    Remove,
    Clear,
}

/// Wraps an in-memory repository and fails selected operations on demand.
#[derive(Clone)]
pub struct FlakyRepository {
    inner: InMemoryUserRepository,
    fail_list: Arc<AtomicBool>,
    fail_add: Arc<AtomicBool>,
    fail_remove: Arc<AtomicBool>,
    fail_clear: Arc<AtomicBool>,
    message: Option<String>,
}

impl FlakyRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            inner: InMemoryUserRepository::with_users(Latency::none(), users),
            fail_list: Arc::new(AtomicBool::new(false)),
            fail_add: Arc::new(AtomicBool::new(false)),
            fail_remove: Arc::new(AtomicBool::new(false)),
            fail_clear: Arc::new(AtomicBool::new(false)),
            message: Some("backing store unavailable".to_string()),
        }
    }

    /// Failures carry no message, so the store falls back to "Unknown error".
    pub fn without_message(mut self) -> Self {
        self.message = None;
        self
    }

    pub fn set_failing(&self, operation: Operation, failing: bool) {
        self.flag(operation).store(failing, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.inner.snapshot()
    }

    fn flag(&self, operation: Operation) -> &AtomicBool {
        match operation {
            Operation::List => &self.fail_list,
            Operation::Add => &self.fail_add,
            Operation::Remove => &self.fail_remove,
            Operation::Clear => &self.fail_clear,
        }
    }

    fn check(&self, operation: Operation) -> Result<(), RepositoryError> {
        if self.flag(operation).load(Ordering::SeqCst) {
            return Err(RepositoryError::OperationFailed {
                message: self.message.clone(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for FlakyRepository {
    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        self.check(Operation::List)?;
        self.inner.list().await
    }

    async fn add(&self, user: User) -> Result<Vec<User>, RepositoryError> {
        self.check(Operation::Add)?;
        self.inner.add(user).await
    }

    async fn remove(&self, user: &User) -> Result<Vec<User>, RepositoryError> {
        self.check(Operation::Remove)?;
        self.inner.remove(user).await
    }

    async fn clear(&self) -> Result<Vec<User>, RepositoryError> {
        self.check(Operation::Clear)?;
        self.inner.clear().await
    }
}
