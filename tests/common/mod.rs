//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_repository;

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;
use userlist::model::User;
use userlist::repository::{InMemoryUserRepository, Latency};
use userlist::ui::users::{EffectStream, UserListStore};

pub use mock_repository::{FlakyRepository, Operation};

pub fn ann() -> User {
    User::new(1, "Ann", "ann@x.com")
}

pub fn bob() -> User {
    User::new(2, "Bob", "bob@example.org")
}

pub fn carol() -> User {
    User::new(3, "Carol", "carol@mail.com")
}

/// Store over a zero-latency in-memory repository holding `users`.
pub fn memory_store(users: Vec<User>) -> (UserListStore, EffectStream, InMemoryUserRepository) {
    let repo = InMemoryUserRepository::with_users(Latency::none(), users);
    let (store, effects) = UserListStore::new(Arc::new(repo.clone()));
    (store, effects, repo)
}

/// Store over a [`FlakyRepository`] holding `users`.
pub fn flaky_store(users: Vec<User>) -> (UserListStore, EffectStream, FlakyRepository) {
    let repo = FlakyRepository::new(users);
    let (store, effects) = UserListStore::new(Arc::new(repo.clone()));
    (store, effects, repo)
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
