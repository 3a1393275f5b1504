//! Tests for loading game configuration from disk.

use perfect_games::GameConfig;
use perfect_tictactoe::{Player, Seat};
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_from_file_reads_every_field() {
    let file = write_config(
        r#"
first_to_move = "engine"
engine_mark = "x"
engine_delay_ms = 0
log_file = "game.log"
"#,
    );

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.first_to_move(), Seat::Engine);
    assert_eq!(*config.engine_mark(), Player::X);
    assert_eq!(config.engine_delay(), Duration::ZERO);
    assert_eq!(config.log_file(), Path::new("game.log"));
    assert_eq!(config.engine().mark(), Player::X);
}

#[test]
fn test_from_file_empty_uses_defaults() {
    let file = write_config("");
    assert_eq!(GameConfig::from_file(file.path()).unwrap(), GameConfig::default());
}

#[test]
fn test_from_file_rejects_bad_toml() {
    let file = write_config("first_to_move = \"nobody\"");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_load_explicit_missing_path_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let err = GameConfig::load(Some(&missing)).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_load_explicit_path() {
    let file = write_config("engine_delay_ms = 25");
    let config = GameConfig::load(Some(file.path())).unwrap();
    assert_eq!(*config.engine_delay_ms(), 25);
    assert_eq!(*config.first_to_move(), Seat::Player);
}
