// Control store - Owns the committed relay/mode state and publishes changes
use crate::domain::control::{Action, ControlState, reduce};
use crate::domain::error::DeckError;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::watch;

/// Committed control state plus commit metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSnapshot {
    pub state: ControlState,
    /// Number of committed transitions since mount.
    pub revision: u64,
    pub updated_at: DateTime<Utc>,
}

impl ControlSnapshot {
    fn commit(&mut self, next: ControlState) {
        self.state = next;
        self.revision += 1;
        self.updated_at = Utc::now();
    }
}

#[derive(Clone)]
pub struct ControlStore {
    tx: Arc<watch::Sender<ControlSnapshot>>,
}

impl ControlStore {
    pub fn new(initial: ControlState) -> Self {
        let snapshot = ControlSnapshot {
            state: initial,
            revision: 0,
            updated_at: Utc::now(),
        };
        Self {
            tx: Arc::new(watch::Sender::new(snapshot)),
        }
    }

    /// Latest committed snapshot.
    pub fn snapshot(&self) -> ControlSnapshot {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ControlSnapshot> {
        self.tx.subscribe()
    }

    /// Run `action` through the reducer against the latest state and commit
    /// the result. Read and replace happen under the channel's write lock, so
    /// concurrent dispatches serialize. Rejected actions commit nothing.
    pub fn dispatch(&self, action: Action) -> Result<ControlSnapshot, DeckError> {
        // Overwritten under the lock by whichever arm runs.
        let mut outcome = Ok(self.snapshot());

        self.tx.send_if_modified(|snapshot| match reduce(&snapshot.state, &action) {
            Ok(next) => {
                snapshot.commit(next);
                outcome = Ok(snapshot.clone());
                true
            }
            Err(err) => {
                outcome = Err(err);
                false
            }
        });

        match &outcome {
            Ok(snapshot) => match &action {
                Action::FlipRelay(key) => tracing::info!(
                    relay = %key,
                    energized = ?snapshot.state.relays.get(key),
                    revision = snapshot.revision,
                    "relay flipped"
                ),
                Action::FlipMode => tracing::info!(
                    auto_mode = snapshot.state.auto_mode,
                    revision = snapshot.revision,
                    "mode flipped"
                ),
            },
            Err(err) => tracing::warn!(?action, "control action rejected: {}", err),
        }

        outcome
    }

    pub fn flip_relay(&self, key: &str) -> Result<ControlSnapshot, DeckError> {
        self.dispatch(Action::FlipRelay(key.to_string()))
    }

    /// Negate the mode flag. Bypasses the fallible dispatch path since the
    /// transition is total.
    pub fn flip_mode(&self) -> ControlSnapshot {
        let mut committed = self.snapshot();

        self.tx.send_modify(|snapshot| {
            let next = snapshot.state.mode_flipped();
            snapshot.commit(next);
            committed = snapshot.clone();
        });

        tracing::info!(
            auto_mode = committed.state.auto_mode,
            revision = committed.revision,
            "mode flipped"
        );
        committed
    }
}
