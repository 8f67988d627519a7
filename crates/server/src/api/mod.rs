use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use shared::{domain::MovieRecordInput, protocol::KeyedMovieFields};
use tokio::sync::RwLock;

/// In-memory movie collection keyed by generated id.
#[derive(Clone, Default)]
pub struct MovieStore {
    movies: Arc<RwLock<BTreeMap<String, KeyedMovieFields>>>,
    next_seq: Arc<AtomicU64>,
}

impl MovieStore {
    /// Ids sort lexicographically in insertion order, so a keyed read lists
    /// movies oldest first.
    fn next_id(&self) -> String {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed) + 1;
        format!("-M{seq:010}")
    }

    pub async fn insert(&self, fields: KeyedMovieFields) -> String {
        let id = self.next_id();
        self.movies.write().await.insert(id.clone(), fields);
        id
    }

    pub async fn snapshot(&self) -> BTreeMap<String, KeyedMovieFields> {
        self.movies.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}

#[derive(Clone, Default)]
pub struct ApiContext {
    pub store: MovieStore,
}

pub fn movies_route() -> &'static str {
    "/movies.json"
}

pub async fn list_movies(ctx: &ApiContext) -> BTreeMap<String, KeyedMovieFields> {
    ctx.store.snapshot().await
}

pub async fn create_movie(ctx: &ApiContext, input: MovieRecordInput) -> String {
    ctx.store.insert(input.into()).await
}

/// Placeholder catalogue used when the server starts with seeding enabled.
pub fn demo_movies() -> Vec<MovieRecordInput> {
    vec![
        MovieRecordInput::new(
            "Some Dummy Movie",
            "This is the opening text of the movie",
            "2021-05-18",
        ),
        MovieRecordInput::new(
            "Some Dummy Movie 2",
            "This is the second opening text of the movie",
            "2021-05-19",
        ),
    ]
}

pub async fn seed_demo_movies(ctx: &ApiContext) {
    for movie in demo_movies() {
        create_movie(ctx, movie).await;
    }
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
