//! Controller layer: fetch state ownership, view selection, and command orchestration.

pub mod orchestration;
pub mod state;

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use client_core::MovieGateway;
use shared::{domain::MovieRecordInput, error::GatewayError};
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, error, info, warn};

use state::{select_view, FetchState, ViewKind};

/// Owns the single `FetchState` and drives the gateway. Clones share state.
#[derive(Clone)]
pub struct MovieController {
    gateway: Arc<dyn MovieGateway>,
    state: Arc<watch::Sender<FetchState>>,
    disposed: Arc<AtomicBool>,
}

impl MovieController {
    pub fn new(gateway: Arc<dyn MovieGateway>) -> Self {
        let (state, _) = watch::channel(FetchState::Idle);
        Self {
            gateway,
            state: Arc::new(state),
            disposed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    pub fn view(&self) -> ViewKind {
        select_view(&self.state.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    /// Moves to `Loading` and fetches on a spawned task; the task applies
    /// the outcome when it settles. Overlapping calls each issue a request
    /// and the last one to settle wins. Returns `None` once disposed.
    pub fn trigger_fetch(&self) -> Option<JoinHandle<()>> {
        if self.is_disposed() {
            debug!("fetch requested after dispose; ignoring");
            return None;
        }

        self.state.send_if_modified(|state| {
            if state.is_loading() {
                false
            } else {
                *state = FetchState::Loading;
                true
            }
        });

        let gateway = Arc::clone(&self.gateway);
        let state = Arc::clone(&self.state);
        let disposed = Arc::clone(&self.disposed);
        Some(tokio::spawn(async move {
            let result = gateway.fetch_all().await;
            if disposed.load(Ordering::Acquire) {
                debug!("controller disposed before fetch settled; dropping result");
                return;
            }
            let next = match result {
                Ok(movies) => {
                    info!(count = movies.len(), "movies loaded");
                    FetchState::Loaded(movies)
                }
                Err(error) => {
                    warn!(%error, "movie fetch failed");
                    FetchState::Failed(error.user_message().to_string())
                }
            };
            state.send_replace(next);
        }))
    }

    /// Stores a new movie without touching the fetch state; call
    /// `trigger_fetch` afterwards to see it.
    pub async fn submit_new_movie(&self, input: MovieRecordInput) -> Result<(), GatewayError> {
        match self.gateway.create(&input).await {
            Ok(()) => {
                info!(title = %input.title, "movie submitted");
                Ok(())
            }
            Err(error) => {
                error!(%error, title = %input.title, "movie submission failed");
                Err(error)
            }
        }
    }

    /// Any fetch still in flight settles without updating state.
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::Release);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }
}

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;
