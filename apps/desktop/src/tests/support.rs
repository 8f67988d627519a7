//! In-memory gateway for controller and shell tests.

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use client_core::MovieGateway;
use shared::{
    domain::{MovieId, MovieRecord, MovieRecordInput},
    error::GatewayError,
};
use tokio::sync::oneshot;

pub fn movie(id: &str, title: &str) -> MovieRecord {
    MovieRecord {
        id: MovieId::new(id),
        title: title.to_string(),
        opening_text: format!("{title} opening"),
        release_date: "2020-01-01".to_string(),
    }
}

/// Fetches snapshot the stored movies when they start, then wait for the
/// next queued gate (if any) before answering.
#[derive(Default)]
pub struct FakeGateway {
    movies: Mutex<Vec<MovieRecord>>,
    gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    fetch_failure: Mutex<Option<GatewayError>>,
    create_failure: Mutex<Option<GatewayError>>,
    fetch_calls: AtomicUsize,
}

impl FakeGateway {
    pub fn with_movies(movies: Vec<MovieRecord>) -> Self {
        let gateway = Self::default();
        *gateway.movies.lock().expect("movies lock") = movies;
        gateway
    }

    pub fn gate_next_fetch(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().expect("gates lock").push_back(rx);
        tx
    }

    pub fn fail_fetches(&self, error: Option<GatewayError>) {
        *self.fetch_failure.lock().expect("failure lock") = error;
    }

    pub fn fail_creates(&self, error: Option<GatewayError>) {
        *self.create_failure.lock().expect("failure lock") = error;
    }

    pub fn stored(&self) -> Vec<MovieRecord> {
        self.movies.lock().expect("movies lock").clone()
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MovieGateway for FakeGateway {
    async fn fetch_all(&self) -> Result<Vec<MovieRecord>, GatewayError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let snapshot = self.stored();
        let failure = self.fetch_failure.lock().expect("failure lock").clone();
        let gate = self.gates.lock().expect("gates lock").pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        match failure {
            Some(error) => Err(error),
            None => Ok(snapshot),
        }
    }

    async fn create(&self, input: &MovieRecordInput) -> Result<(), GatewayError> {
        if let Some(error) = self.create_failure.lock().expect("failure lock").clone() {
            return Err(error);
        }
        let mut movies = self.movies.lock().expect("movies lock");
        let id = MovieId(format!("created-{}", movies.len() + 1));
        movies.push(MovieRecord {
            id,
            title: input.title.clone(),
            opening_text: input.opening_text.clone(),
            release_date: input.release_date.clone(),
        });
        Ok(())
    }
}
