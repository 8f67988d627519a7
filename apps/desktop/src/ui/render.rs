use shared::domain::{MovieId, MovieRecord};

use crate::controller::state::ViewKind;

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "Found No Movies";

/// One rendered list entry, keyed by the record id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMovie {
    pub key: MovieId,
    pub text: String,
}

pub fn render_movie(movie: &MovieRecord) -> String {
    format!(
        "## {}\n### {}\n{}",
        movie.title, movie.release_date, movie.opening_text
    )
}

pub fn render_movie_list(movies: &[MovieRecord]) -> Vec<RenderedMovie> {
    movies
        .iter()
        .map(|movie| RenderedMovie {
            key: movie.id.clone(),
            text: render_movie(movie),
        })
        .collect()
}

pub fn render_view(view: &ViewKind) -> String {
    match view {
        ViewKind::Loading => LOADING_TEXT.to_string(),
        ViewKind::Error(message) => message.clone(),
        ViewKind::Empty => EMPTY_TEXT.to_string(),
        ViewKind::List(movies) => render_movie_list(movies)
            .into_iter()
            .map(|item| item.text)
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

#[cfg(test)]
#[path = "../tests/render_tests.rs"]
mod tests;
