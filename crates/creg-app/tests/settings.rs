//! Settings files on disk.

use std::fs;

use creg_app::{AppError, SelectionMode, Settings};
use creg_model::{CreditBand, OverflowPolicy};
use tempfile::TempDir;

#[test]
fn load_from_reads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("creg.toml");
    fs::write(
        &path,
        "[registration]\nmode = \"list\"\noverflow = \"flag\"\n\n[band]\nmin = 6\nmax = 12\n",
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();

    assert_eq!(settings.mode(), SelectionMode::List);
    assert_eq!(settings.options().overflow, OverflowPolicy::Flag);
    assert_eq!(settings.band, Some(CreditBand::new(6, 12).unwrap()));
}

#[test]
fn load_optional_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let settings = Settings::load_optional(Some(&path)).unwrap();

    assert_eq!(settings, Settings::default());
    assert_eq!(Settings::load_optional(None).unwrap(), Settings::default());
}

#[test]
fn load_from_rejects_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("creg.toml");
    fs::write(&path, "[registration\nmode = ").unwrap();

    let err = Settings::load_from(&path).unwrap_err();

    assert!(matches!(err, AppError::Settings { .. }));
}

#[test]
fn load_from_missing_file_is_read_error() {
    let dir = TempDir::new().unwrap();

    let err = Settings::load_from(&dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, AppError::SettingsRead { .. }));
}
