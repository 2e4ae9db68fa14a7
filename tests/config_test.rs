//! Tests for layered Settings loading

use std::sync::Mutex;

use tempfile::TempDir;

use nettree::application::sample::sample_network;
use nettree::application::ApplicationError;
use nettree::cli::CliError;
use nettree::config::{Settings, DEFAULT_NETWORK_NAME};
use nettree::exitcode;

// Environment variables are process-wide; serialise tests that touch them.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clear_env() {
    std::env::remove_var("NETTREE_NETWORK_NAME");
    std::env::remove_var("NETTREE_COLOR");
}

#[test]
fn given_missing_file_when_loading_then_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    let temp = TempDir::new().unwrap();

    let settings = Settings::load_from(Some(temp.path().join("absent.toml").as_path())).unwrap();

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.network_name, DEFAULT_NETWORK_NAME);
}

#[test]
fn given_config_file_when_loading_then_file_overrides_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nettree.toml");
    std::fs::write(&path, "network_name = \"lab\"\n").unwrap();

    let settings = Settings::load_from(Some(path.as_path())).unwrap();

    assert_eq!(settings.network_name, "lab");
    assert!(settings.color, "unspecified field keeps default");
}

#[test]
fn given_env_var_when_loading_then_env_overrides_file() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nettree.toml");
    std::fs::write(&path, "network_name = \"lab\"\ncolor = true\n").unwrap();

    std::env::set_var("NETTREE_NETWORK_NAME", "from-env");
    std::env::set_var("NETTREE_COLOR", "false");
    let settings = Settings::load_from(Some(path.as_path()));
    clear_env();

    let settings = settings.unwrap();
    assert_eq!(settings.network_name, "from-env");
    assert!(!settings.color);
}

#[test]
fn given_malformed_file_when_loading_then_config_error() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nettree.toml");
    std::fs::write(&path, "network_name = [unterminated").unwrap();

    let err = Settings::load_from(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }), "{err}");
}

#[test]
fn given_blank_network_name_in_file_when_building_inventory_then_dataerr() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nettree.toml");
    std::fs::write(&path, "network_name = \"  \"\n").unwrap();

    let settings = Settings::load_from(Some(path.as_path())).unwrap();
    let err = CliError::from(sample_network(settings.network_name).unwrap_err());

    assert!(matches!(err, CliError::Application(ApplicationError::Domain(_))));
    assert_eq!(err.exit_code(), exitcode::DATAERR);
}
