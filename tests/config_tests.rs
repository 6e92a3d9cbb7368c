use std::io::Write;

use betxtract::domain::SourceId;
use betxtract::error::{ConfigError, Error};
use betxtract::infrastructure::config::settings::Config;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn config_loads_full_file() {
    let toml = r#"
[logging]
level = "debug"
format = "json"

[bridge]
timeout_ms = 2500
source_tag = "betxtractor"

[sites.piwixchange]
mirrors = ["piwi500.com"]

[sites.piwixchange.selectors]
date = ".biab_market-date"
"#;
    let file = write_temp_config(toml);
    let config = Config::load(file.path()).expect("config loads");

    assert_eq!(config.logging.format, "json");
    assert_eq!(config.bridge.timeout().as_millis(), 2500);
    assert_eq!(config.bridge.source_tag, "betxtractor");

    let registry = config.registry();
    let piwi = registry.detect("www.piwi500.com").expect("mirror detected");
    assert_eq!(piwi.id, SourceId::Piwixchange);
    assert_eq!(piwi.selectors.date.as_deref(), Some(".biab_market-date"));
    assert!(registry.detect("piwi88.com").is_none());
}

#[test]
fn config_rejects_unknown_site() {
    let file = write_temp_config("[sites.winamax]\ndomain = \"winamax.fr\"\n");
    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue { field: "sites", reason })) => {
            assert!(reason.contains("winamax"));
        }
        Err(err) => panic!("Expected unknown site error, got {err}"),
        Ok(_) => panic!("Expected unknown site error, got Ok"),
    }
}

#[test]
fn config_rejects_empty_source_tag() {
    let file = write_temp_config("[bridge]\nsource_tag = \"  \"\n");
    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::MissingField {
            field: "bridge.source_tag",
        })) => {}
        Err(err) => panic!("Expected missing source tag, got {err}"),
        Ok(_) => panic!("Expected missing source tag, got Ok"),
    }
}

#[test]
fn config_rejects_malformed_toml() {
    let file = write_temp_config("[bridge\ntimeout_ms = 1");
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn config_reports_missing_file() {
    assert!(matches!(
        Config::load("/nonexistent/betxtract.toml"),
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn config_rejects_unknown_sections() {
    let file = write_temp_config("[wallet]\nkey = \"x\"\n");
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}
