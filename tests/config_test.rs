//! Tests for loading session config files.

use console_tictactoe::SessionConfig;
use std::io::Write;

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_instructions = false").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();

    let config = SessionConfig::from_file(file.path()).unwrap();
    assert!(!*config.show_instructions());
    assert_eq!(*config.restart_key(), 'r');
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SessionConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_instruction_override() {
    let config = SessionConfig::default().with_instructions(false);
    assert!(!*config.show_instructions());
}
