//! User list management built on the Model-View-Intent pattern.
//!
//! Views send [`UserIntent`](ui::users::UserIntent)s to a store, observe
//! [`UserListState`](ui::users::UserListState) snapshots and consume one-shot
//! [`UserEffect`](ui::users::UserEffect)s. Data comes from any
//! [`UserRepository`](repository::UserRepository).

pub mod config;
pub mod logging;
pub mod model;
pub mod repository;
pub mod ui;
