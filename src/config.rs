//! Configuration management for Bookshelf

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LibraryConfig {
    /// Seed the collection with the built-in starter books
    pub seed_defaults: bool,
    /// JSON file of `{ "title", "author" }` entries; used instead of the
    /// built-in books when set
    pub seed_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub library: LibraryConfig,
}

impl AppConfig {
    /// Load configuration from `config/` and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Load configuration from files in `dir` and environment variables.
    ///
    /// Later sources win: `dir/default`, then `dir/<RUN_MODE>`, then
    /// `BOOKSHELF__<SECTION>__<KEY>` variables.
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Config::builder()
            .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&dir.join(&run_mode).to_string_lossy()).required(false))
            // `__` keeps single underscores inside keys such as seed_defaults
            .add_source(
                Environment::with_prefix("BOOKSHELF")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            seed_defaults: true,
            seed_file: None,
        }
    }
}
