//! Decoding of read-endpoint bodies into `MovieRecord`s.
//!
//! Two backend shapes are understood:
//! - an id-keyed object (`{"<id>": {title, openingText, releaseData}}`), the
//!   authoritative form written by the create endpoint;
//! - a film array (`[{episode_id, title, opening_crawl, release_date}]`),
//!   either bare or wrapped in a SWAPI `{"count": .., "results": [...]}`
//!   envelope.

use serde_json::{Map, Value};
use shared::{
    domain::{MovieId, MovieRecord},
    error::GatewayError,
    protocol::{FilmPayload, KeyedMovieFields},
};

const RESULTS_FIELD: &str = "results";

/// Entry point for every read-endpoint body.
pub fn parse_payload(body: &[u8]) -> Result<Vec<MovieRecord>, GatewayError> {
    let value: Value = serde_json::from_slice(body)?;
    decode_value(value)
}

pub fn decode_value(value: Value) -> Result<Vec<MovieRecord>, GatewayError> {
    match value {
        Value::Array(items) => decode_film_array(items),
        Value::Object(mut map) => {
            // Keyed entries are always objects, so an array under `results`
            // can only be a film envelope (`count`/`next` siblings are ignored).
            if matches!(map.get(RESULTS_FIELD), Some(Value::Array(_))) {
                if let Some(Value::Array(items)) = map.remove(RESULTS_FIELD) {
                    return decode_film_array(items);
                }
            }
            decode_keyed(map)
        }
        // Keyed backends answer `null` for a collection that was never written.
        Value::Null => Ok(Vec::new()),
        other => Err(GatewayError::parse(format!(
            "expected an object or array payload, got {}",
            value_kind(&other)
        ))),
    }
}

/// One record per key, id taken from the key, in the map's iteration order.
pub fn decode_keyed(map: Map<String, Value>) -> Result<Vec<MovieRecord>, GatewayError> {
    map.into_iter()
        .map(|(key, fields)| {
            if !fields.is_object() {
                return Err(GatewayError::parse(format!(
                    "entry '{key}' is {} instead of an object",
                    value_kind(&fields)
                )));
            }
            let fields: KeyedMovieFields = serde_json::from_value(fields)
                .map_err(|e| GatewayError::parse(format!("entry '{key}': {e}")))?;
            Ok(MovieRecord {
                id: MovieId(key),
                title: fields.title,
                opening_text: fields.opening_text,
                release_date: fields.release_date,
            })
        })
        .collect()
}

/// Film objects in payload order; the id is the episode number.
pub fn decode_film_array(items: Vec<Value>) -> Result<Vec<MovieRecord>, GatewayError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let film: FilmPayload = serde_json::from_value(item)
                .map_err(|e| GatewayError::parse(format!("film #{index}: {e}")))?;
            Ok(MovieRecord {
                id: MovieId(episode_id_text(film.episode_id.as_ref())),
                title: film.title,
                opening_text: film.opening_crawl,
                release_date: film.release_date,
            })
        })
        .collect()
}

fn episode_id_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "tests/payload_tests.rs"]
mod tests;
