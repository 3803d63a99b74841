use ld_request_header::HeaderOptions;
use pretty_assertions::assert_eq;

use crate::config::{Config, ConfigError, Headers, Logging};

#[test]
pub fn config_should_be_deserializable_from_toml() {
    // Arrange
    let toml = r#"
[headers]
default_format = "jsonld"

[logging]
filter = "ld_request_header=debug"
"#;
    // Act
    let config = Config::from_toml(toml).unwrap();
    // Assert
    let expected_config = Config {
        headers: Some(Headers {
            default_format: Some("jsonld".into()),
        }),
        logging: Some(Logging {
            filter: Some("ld_request_header=debug".into()),
        }),
    };
    assert_eq!(expected_config, config);
    assert_eq!(HeaderOptions::new("jsonld"), config.header_options());
    assert_eq!("ld_request_header=debug", config.log_filter());
}

#[test]
pub fn empty_config_should_use_defaults() {
    // Act
    let config = Config::from_toml("").unwrap();
    // Assert
    assert_eq!(Config::default(), config);
    assert_eq!("json", config.header_options().default_format());
    assert_eq!("info", config.log_filter());
}

#[test]
pub fn sections_without_values_should_use_defaults() {
    // Arrange
    let toml = r#"
[headers]
# default_format = use default

[logging]
"#;
    // Act
    let config = Config::from_toml(toml).unwrap();
    // Assert
    assert_eq!(HeaderOptions::default(), config.header_options());
    assert_eq!(Logging::FILTER_DEFAULT, config.log_filter());
}

#[test]
pub fn malformed_config_should_be_rejected() {
    let result = Config::from_toml("[headers]\ndefault_format = 4");
    assert!(result.is_err(), "Accepted a number as format!");
}

#[test]
pub fn read_should_fail_for_missing_file() {
    // Act
    let result = Config::read("does/not/exist/ld-header.toml");
    // Assert
    match result {
        Err(ConfigError::Io(_)) => {}
        other => panic!("Expected io error, got {other:?}"),
    }
}
