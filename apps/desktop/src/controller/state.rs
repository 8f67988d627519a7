//! Fetch state and the view derived from it.

use shared::domain::MovieRecord;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<MovieRecord>),
    Failed(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Which UI mode to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewKind {
    Loading,
    Error(String),
    Empty,
    List(Vec<MovieRecord>),
}

/// Precedence: failure, then loading, then empty, then the list. `Idle`
/// shows the empty view until the first fetch settles.
pub fn select_view(state: &FetchState) -> ViewKind {
    match state {
        FetchState::Failed(message) => ViewKind::Error(message.clone()),
        FetchState::Loading => ViewKind::Loading,
        FetchState::Idle => ViewKind::Empty,
        FetchState::Loaded(movies) if movies.is_empty() => ViewKind::Empty,
        FetchState::Loaded(movies) => ViewKind::List(movies.clone()),
    }
}

#[cfg(test)]
#[path = "../tests/state_tests.rs"]
mod tests;
