//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow between a view and its store.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Store ──→ Reducer ──→ State ──→ View
//!    ↑         │                              │
//!    │         └──→ Effect (one-shot) ──→─────┤
//!    └────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of everything the view renders
//! - **Intent**: User actions fed into the store
//! - **Reducer**: Pure function that transforms state
//! - **Effect**: Transient notification, delivered once and never stored

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::Effect;
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
