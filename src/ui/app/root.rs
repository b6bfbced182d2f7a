//! Root app struct.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::infra::api::AdminApi;
use crate::infra::storage::PersistedStorage;

use super::state::AppState;
use super::store::{Action, AsyncAction, AuthAction, RequestKey, Ticket};

const ACTION_CHANNEL_CAPACITY: usize = 256;

/// Owns the state, the backend handle and the channel the runtime reports
/// back on. Everything that changes state goes through [`AdminApp::dispatch`].
pub struct AdminApp {
    pub state: AppState,

    pub api: Arc<dyn AdminApi>,
    pub storage: Arc<PersistedStorage>,

    pub action_tx: mpsc::Sender<Action>,
    pub action_rx: mpsc::Receiver<Action>,

    /// Cancellation for each key the state's request tracker is waiting on.
    in_flight: HashMap<RequestKey, CancellationToken>,
    next_generation: u64,
    shutdown: CancellationToken,
}

impl AdminApp {
    /// Builds the app and restores any persisted session.
    pub fn new(api: Arc<dyn AdminApi>, storage: Arc<PersistedStorage>) -> Self {
        let (action_tx, action_rx) = mpsc::channel(ACTION_CHANNEL_CAPACITY);
        let mut app = Self {
            state: AppState::default(),
            api,
            storage,
            action_tx,
            action_rx,
            in_flight: HashMap::new(),
            next_generation: 0,
            shutdown: CancellationToken::new(),
        };

        match app.storage.load_auth() {
            Ok(Some(persisted)) => app.dispatch(Action::Auth(AuthAction::Restore(persisted))),
            Ok(None) => {}
            Err(err) => log::warn!("Ignoring unreadable persisted session: {err}"),
        }
        app
    }

    /// Register a new request under `key`, superseding the previous one.
    pub(crate) fn begin_request(&mut self, key: RequestKey) -> (Ticket, CancellationToken) {
        self.next_generation += 1;
        let generation = self.next_generation;
        let ticket = Ticket {
            key: key.for_generation(generation),
            generation,
        };
        let cancel = self.shutdown.child_token();
        if let Some(previous) = self.in_flight.insert(ticket.key, cancel.clone()) {
            log::debug!("{ticket} supersedes an earlier request");
            previous.cancel();
        }
        self.dispatch(Action::Async(AsyncAction::Started(ticket)));
        (ticket, cancel)
    }

    /// Cancel and forget every request the tracker no longer waits on:
    /// finished ones, and everything a logout dropped.
    pub(crate) fn prune_in_flight(&mut self) {
        let requests = &self.state.requests;
        self.in_flight.retain(|key, cancel| {
            let pending = requests.is_pending(key);
            if !pending {
                cancel.cancel();
            }
            pending
        });
    }

    pub fn in_flight(&self) -> usize {
        self.state.requests.pending()
    }

    /// Drain results until every request started so far, and every follow-up
    /// they trigger, has been reduced.
    /// Results of requests that were dropped meanwhile are reduced too, and
    /// discarded as stale.
    pub async fn settle(&mut self) {
        while self.state.requests.pending() > 0 {
            match self.action_rx.recv().await {
                Some(action) => self.dispatch(action),
                None => break,
            }
        }
        self.poll_action_messages();
    }
}

impl Drop for AdminApp {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
