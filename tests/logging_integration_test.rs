//! Integration tests for logging functionality
//!
//! `init_logging` installs the global subscriber, so only one test in this
//! binary may call it successfully.

use tally::bootstrap::BootstrapGate;
use tally::config::{keys, ConfigResolver, EnvSnapshot, LoggingConfig};
use tally::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "logs");
    assert_eq!(config.local_rotation, "daily");
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_level_is_rejected() {
    let err = init_logging("verbose", &LoggingConfig::default())
        .err()
        .expect("unknown level must fail");
    assert!(err.to_string().contains("Invalid log level"));
}

#[test]
fn test_file_logging_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };
    assert!(!log_path.exists());

    let guard = init_logging("debug", &config).unwrap();
    // Library events carry the `tally` target the default filter admits
    let resolver = ConfigResolver::new(EnvSnapshot::from_pairs([(
        "CLERK_PUBLISHABLE_KEY",
        "pk_test_abc",
    )]));
    BootstrapGate::mount(&resolver, &keys::CLERK_PUBLISHABLE_KEY);
    drop(guard);

    assert!(log_path.is_dir());
    let contents = std::fs::read_to_string(log_path.join("tally.log")).unwrap();
    assert!(contents.contains("Bootstrap gate passed"));
}
