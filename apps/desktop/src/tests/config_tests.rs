use super::*;

use std::{
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn no_env(_: &str) -> Option<String> {
    None
}

fn temp_config(contents: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = env::temp_dir().join(format!("movies_desktop_config_test_{suffix}"));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("movies.toml");
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn defaults_point_at_local_server() {
    let settings = finish(RawSettings::default()).expect("settings");
    assert_eq!(settings.endpoint_url.as_str(), DEFAULT_ENDPOINT_URL);
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn file_then_env_then_flag() {
    let path = temp_config("endpoint_url = \"https://file.example/movies.json\"\nlog_filter = \"debug\"\n");
    let overrides = Overrides {
        config_path: Some(path.clone()),
        endpoint_url: None,
    };

    let settings = load_settings_with(&overrides, no_env).expect("settings");
    assert_eq!(settings.endpoint_url.as_str(), "https://file.example/movies.json");
    assert_eq!(settings.log_filter, "debug");

    let settings = load_settings_with(&overrides, |key| {
        (key == "APP__ENDPOINT_URL").then(|| "https://env.example/movies.json".to_string())
    })
    .expect("settings");
    assert_eq!(settings.endpoint_url.as_str(), "https://env.example/movies.json");

    let overrides = Overrides {
        endpoint_url: Some("https://flag.example/movies.json".into()),
        ..overrides
    };
    let settings = load_settings_with(&overrides, |key| {
        (key == "MOVIES_ENDPOINT_URL").then(|| "https://env.example/movies.json".to_string())
    })
    .expect("settings");
    assert_eq!(settings.endpoint_url.as_str(), "https://flag.example/movies.json");

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn explicit_missing_file_is_an_error() {
    let overrides = Overrides {
        config_path: Some(PathBuf::from("/nonexistent/movies/movies.toml")),
        endpoint_url: None,
    };

    let err = load_settings_with(&overrides, no_env).expect_err("must fail");
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn rejects_invalid_endpoint() {
    let overrides = Overrides {
        config_path: None,
        endpoint_url: Some("not a url".into()),
    };
    let err = load_settings_with(&overrides, no_env).expect_err("must fail");
    assert!(err.to_string().contains("invalid endpoint url"));

    let overrides = Overrides {
        config_path: None,
        endpoint_url: Some("ftp://example.com/movies".into()),
    };
    let err = load_settings_with(&overrides, no_env).expect_err("must fail");
    assert!(err.to_string().contains("must use http or https"));
}

#[test]
fn non_string_endpoint_in_file_is_rejected() {
    let mut raw = RawSettings::default();
    let err = apply_file(&mut raw, "endpoint_url = 42\n").expect_err("must fail");
    assert!(err.to_string().contains("endpoint_url must be a string"));
}
