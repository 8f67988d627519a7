use std::{collections::HashMap, fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "movies.toml";
pub const DEFAULT_ENDPOINT_URL: &str = "http://127.0.0.1:8080/movies.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint_url: Url,
    pub log_filter: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RawSettings {
    endpoint_url: String,
    log_filter: String,
}

impl Default for RawSettings {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.into(),
            log_filter: "info".into(),
        }
    }
}

/// Command-line values that win over file and environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub endpoint_url: Option<String>,
}

pub fn load_settings(overrides: &Overrides) -> Result<Settings> {
    load_settings_with(overrides, |key| std::env::var(key).ok())
}

fn load_settings_with(
    overrides: &Overrides,
    var: impl Fn(&str) -> Option<String>,
) -> Result<Settings> {
    let mut raw = RawSettings::default();

    match &overrides.config_path {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            apply_file(&mut raw, &contents)
                .with_context(|| format!("invalid config file '{}'", path.display()))?;
        }
        None => {
            if let Ok(contents) = fs::read_to_string(DEFAULT_CONFIG_FILE) {
                apply_file(&mut raw, &contents)
                    .with_context(|| format!("invalid config file '{DEFAULT_CONFIG_FILE}'"))?;
            }
        }
    }

    if let Some(v) = var("MOVIES_ENDPOINT_URL") {
        raw.endpoint_url = v;
    }
    if let Some(v) = var("APP__ENDPOINT_URL") {
        raw.endpoint_url = v;
    }
    if let Some(v) = var("APP__LOG_FILTER") {
        raw.log_filter = v;
    }

    if let Some(v) = &overrides.endpoint_url {
        raw.endpoint_url = v.clone();
    }

    finish(raw)
}

fn apply_file(raw: &mut RawSettings, contents: &str) -> Result<()> {
    let file_cfg: HashMap<String, toml::Value> = toml::from_str(contents)?;
    if let Some(v) = file_cfg.get("endpoint_url") {
        let Some(v) = v.as_str() else {
            bail!("endpoint_url must be a string");
        };
        raw.endpoint_url = v.to_string();
    }
    if let Some(v) = file_cfg.get("log_filter").and_then(toml::Value::as_str) {
        raw.log_filter = v.to_string();
    }
    Ok(())
}

fn finish(raw: RawSettings) -> Result<Settings> {
    let endpoint_url = Url::parse(raw.endpoint_url.trim())
        .with_context(|| format!("invalid endpoint url '{}'", raw.endpoint_url))?;
    if !matches!(endpoint_url.scheme(), "http" | "https") {
        bail!(
            "endpoint url '{endpoint_url}' must use http or https, not '{}'",
            endpoint_url.scheme()
        );
    }
    Ok(Settings {
        endpoint_url,
        log_filter: raw.log_filter,
    })
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
