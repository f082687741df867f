//! Serialized intent dispatch.
//!
//! A single task owns the [`UserListStore`] and handles intents strictly one
//! after another, so two repository calls never interleave their writes to
//! the state. Views talk to it through a cloneable [`StoreHandle`].

use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use super::intent::UserIntent;
use super::state::UserListState;
use super::store::UserListStore;

/// Errors returned by [`StoreHandle`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("intent loop has stopped")]
    Closed,
}

/// Options for the intent loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueueOptions {
    /// Handle `LoadUsers` before anything else.
    pub load_on_start: bool,
}

enum Command {
    Intent(UserIntent),
    Settle { respond_to: oneshot::Sender<()> },
}

pub struct IntentQueue;

impl IntentQueue {
    /// Start the intent loop on the current tokio runtime.
    ///
    /// The loop ends once every [`StoreHandle`] is dropped.
    pub fn spawn(store: UserListStore, options: QueueOptions) -> (StoreHandle, JoinHandle<()>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let handle = StoreHandle {
            sender,
            state: store.subscribe(),
        };
        if options.load_on_start {
            // The receiver is alive until the task below exits.
            let _ = handle.sender.send(Command::Intent(UserIntent::LoadUsers));
        }
        let task = tokio::spawn(run(store, receiver));
        (handle, task)
    }
}

async fn run(store: UserListStore, mut receiver: mpsc::UnboundedReceiver<Command>) {
    tracing::debug!("Intent loop started");
    while let Some(command) = receiver.recv().await {
        match command {
            Command::Intent(intent) => store.handle(intent).await,
            Command::Settle { respond_to } => {
                if respond_to.send(()).is_err() {
                    tracing::trace!("Settle response dropped (receiver gone)");
                }
            }
        }
    }
    tracing::debug!("Intent loop stopped");
}

/// Cloneable handle to a running intent loop.
#[derive(Clone)]
pub struct StoreHandle {
    sender: mpsc::UnboundedSender<Command>,
    state: watch::Receiver<UserListState>,
}

impl StoreHandle {
    /// Queue an intent. Intents are handled in the order they are queued.
    pub fn dispatch(&self, intent: UserIntent) -> Result<(), DispatchError> {
        self.sender
            .send(Command::Intent(intent))
            .map_err(|_| DispatchError::Closed)
    }

    /// Wait until every intent queued before this call has been handled.
    pub async fn settle(&self) -> Result<(), DispatchError> {
        let (respond_to, receiver) = oneshot::channel();
        self.sender
            .send(Command::Settle { respond_to })
            .map_err(|_| DispatchError::Closed)?;
        receiver.await.map_err(|_| DispatchError::Closed)
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> UserListState {
        self.state.borrow().clone()
    }

    /// Observe state snapshots.
    pub fn subscribe(&self) -> watch::Receiver<UserListState> {
        self.state.clone()
    }
}
