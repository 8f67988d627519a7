//! Wire shapes exchanged with movie backends.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::MovieRecordInput;

/// One entry of an id-keyed payload. Older backends spell the date field
/// `releaseData`; both spellings are accepted and `releaseData` is
/// written back so existing readers keep working.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyedMovieFields {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, rename = "openingText", deserialize_with = "null_as_empty")]
    pub opening_text: String,
    #[serde(
        default,
        rename = "releaseData",
        alias = "releaseDate",
        deserialize_with = "null_as_empty"
    )]
    pub release_date: String,
}

impl From<MovieRecordInput> for KeyedMovieFields {
    fn from(value: MovieRecordInput) -> Self {
        Self {
            title: value.title,
            opening_text: value.opening_text,
            release_date: value.release_date,
        }
    }
}

/// A film object as served by SWAPI-style backends.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilmPayload {
    #[serde(default)]
    pub episode_id: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub opening_crawl: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub release_date: String,
}

/// Body returned by a keyed backend after a successful POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedMovieResponse {
    pub name: String,
}

/// Text fields render empty rather than failing when a backend sends `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
