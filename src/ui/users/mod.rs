//! The user list screen: state, intents, effects and the store driving them.

mod effect;
mod intent;
mod mutation;
mod queue;
mod reducer;
mod state;
mod store;

pub use effect::{EffectStream, UserEffect, UNDO_ACTION};
pub use intent::UserIntent;
pub use mutation::UserListMutation;
pub use queue::{DispatchError, IntentQueue, QueueOptions, StoreHandle};
pub use reducer::UserListReducer;
pub use state::UserListState;
pub use store::{
    UserListStore, NO_USERS_AVAILABLE, NO_USERS_FOUND, USERS_CLEARED, USERS_LOADED, USER_ADDED,
    USER_DELETED,
};
