//! View-state holder for the users list page.
//!
//! [`UsersView`] owns the displayed list and fills it from one
//! [`UserDataSource::get_all`] call per initialization. Rendering code watches
//! the state through [`UsersView::subscribe`] and redraws on every change.
//!
//! Lifecycle: `Idle` -> (`on_init`) -> `Loading` -> `Loaded` | `Failed`.
//! A failed fetch keeps whatever list was shown before. Tearing the view down
//! (explicitly or by dropping it) cancels the in-flight fetch, and a response
//! arriving afterwards is discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::UserDataSource;
use crate::models::UserRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl LoadStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadStatus::Failed(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersViewState {
    pub users: Vec<UserRecord>,
    pub status: LoadStatus,
}

pub struct UsersView {
    data_source: UserDataSource,
    state: Arc<watch::Sender<UsersViewState>>,
    // Bumped on every init and teardown; a fetch only writes if its epoch is current.
    epoch: Arc<AtomicU64>,
    inflight: Option<JoinHandle<()>>,
}

impl UsersView {
    pub fn new(data_source: UserDataSource) -> Self {
        let (tx, _rx) = watch::channel(UsersViewState::default());
        Self {
            data_source,
            state: Arc::new(tx),
            epoch: Arc::new(AtomicU64::new(0)),
            inflight: None,
        }
    }

    /// Initialization hook. Returns immediately; the list is replaced later
    /// from a spawned task once the response arrives.
    ///
    /// Must be called from within a tokio runtime. Calling it again while a
    /// fetch is pending cancels that fetch and starts a fresh one.
    pub fn on_init(&mut self) {
        self.abort_inflight();

        let mut my_epoch = 0;
        self.state.send_modify(|s| {
            my_epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
            s.status = LoadStatus::Loading;
        });

        let fetch = self.data_source.get_all();
        let state = Arc::clone(&self.state);
        let epoch = Arc::clone(&self.epoch);

        self.inflight = Some(tokio::spawn(async move {
            let outcome = fetch.await;
            state.send_if_modified(|s| {
                if epoch.load(Ordering::SeqCst) != my_epoch {
                    tracing::debug!("Discarding users response for a stale view");
                    return false;
                }
                match outcome {
                    Ok(users) => {
                        s.users = users;
                        s.status = LoadStatus::Loaded;
                    }
                    Err(e) => {
                        tracing::warn!(%e, "Failed to load users");
                        s.status = LoadStatus::Failed(e.to_string());
                    }
                }
                true
            });
        }));
    }

    /// Wait for the pending fetch, if any, to write its outcome.
    pub async fn settled(&mut self) {
        let Some(handle) = self.inflight.take() else {
            return;
        };
        if let Err(e) = handle.await {
            if e.is_panic() {
                tracing::error!(%e, "Users fetch task panicked");
                self.state
                    .send_modify(|s| s.status = LoadStatus::Failed("internal error".into()));
            }
        }
    }

    /// Cancel the pending fetch. No later response can touch the state.
    pub fn teardown(&mut self) {
        self.state.send_if_modified(|_| {
            self.epoch.fetch_add(1, Ordering::SeqCst);
            false
        });
        self.abort_inflight();
    }

    pub fn subscribe(&self) -> watch::Receiver<UsersViewState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> UsersViewState {
        self.state.borrow().clone()
    }

    pub fn users(&self) -> Vec<UserRecord> {
        self.state.borrow().users.clone()
    }

    pub fn status(&self) -> LoadStatus {
        self.state.borrow().status.clone()
    }

    fn abort_inflight(&mut self) {
        if let Some(handle) = self.inflight.take() {
            handle.abort();
        }
    }
}

impl Drop for UsersView {
    fn drop(&mut self) {
        self.teardown();
    }
}
