//! Development backend serving a keyed movie collection over HTTP.

use std::{collections::BTreeMap, sync::Arc};

use axum::{extract::State, routing::get, Json, Router};
use shared::{
    domain::MovieRecordInput,
    protocol::{CreatedMovieResponse, KeyedMovieFields},
};
use tracing::info;

pub mod api;
pub mod config;

use api::{create_movie, list_movies, movies_route, ApiContext};

#[derive(Clone, Default)]
pub struct AppState {
    pub api: ApiContext,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(movies_route(), get(http_list_movies).post(http_create_movie))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_list_movies(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<String, KeyedMovieFields>> {
    Json(list_movies(&state.api).await)
}

async fn http_create_movie(
    State(state): State<Arc<AppState>>,
    Json(input): Json<MovieRecordInput>,
) -> Json<CreatedMovieResponse> {
    let title = input.title.clone();
    let name = create_movie(&state.api, input).await;
    info!(id = %name, %title, "stored movie");
    Json(CreatedMovieResponse { name })
}

#[cfg(test)]
#[path = "tests/router_tests.rs"]
mod tests;
