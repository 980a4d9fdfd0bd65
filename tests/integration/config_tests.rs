//! Configuration layering: files, RUN_MODE file, then environment
//!
//! Everything touching process environment lives in one test so the
//! variables are never read concurrently by another config test.

use std::env;
use std::fs;
use std::path::PathBuf;

use bookshelf::AppConfig;

fn config_dir() -> PathBuf {
    let dir = env::temp_dir().join(format!("bookshelf-config-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("Failed to create config dir");
    fs::write(
        dir.join("default.toml"),
        "[logging]\nlevel = \"warn\"\nformat = \"pretty\"\n\n[library]\nseed_defaults = true\n",
    )
    .expect("Failed to write default config");
    fs::write(
        dir.join("layering.toml"),
        "[logging]\nlevel = \"debug\"\n\n[library]\nseed_file = \"books.json\"\n",
    )
    .expect("Failed to write run mode config");
    dir
}

#[test]
fn test_load_layers_files_and_environment() {
    let dir = config_dir();
    env::set_var("RUN_MODE", "layering");

    // Files only: the RUN_MODE file overrides default
    let config = AppConfig::load_from(&dir).expect("Failed to load config");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "pretty");
    assert!(config.library.seed_defaults);
    assert_eq!(config.library.seed_file, Some(PathBuf::from("books.json")));

    // Environment overrides both files, including keys containing `_`
    env::set_var("BOOKSHELF__LIBRARY__SEED_DEFAULTS", "false");
    env::set_var("BOOKSHELF__LOGGING__FORMAT", "json");

    let config = AppConfig::load_from(&dir).expect("Failed to load config");
    assert!(!config.library.seed_defaults);
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.level, "debug");

    // The default entry point reads ./config and the same variables
    env::remove_var("RUN_MODE");
    let config = AppConfig::load().expect("Failed to load config");
    assert!(!config.library.seed_defaults);
    assert_eq!(config.logging.format, "json");

    env::remove_var("BOOKSHELF__LIBRARY__SEED_DEFAULTS");
    env::remove_var("BOOKSHELF__LOGGING__FORMAT");
    fs::remove_dir_all(&dir).ok();
}
