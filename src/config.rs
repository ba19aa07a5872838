//! Configuration for the almanac data directory.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variable (ALMANAC_DATA_DIR)
//! 2. Config file (.almanac/config.yaml)
//! 3. Defaults (./data, extension "yaml")
//!
//! Config file discovery:
//! - Searches current directory and parents for .almanac/config.yaml
//! - The data path in the config file is relative to the project root
//!   (the directory containing .almanac/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::loader::{DataSource, DEFAULT_EXTENSION};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "ALMANAC_DATA_DIR";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// Data directory (relative to the project root)
    pub dir: Option<String>,
    /// Extension of data files
    pub extension: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Directory holding day-files, quotes and books
    pub data_dir: PathBuf,
    /// Extension of data files
    pub extension: String,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl ResolvedConfig {
    /// The data source described by this configuration
    pub fn data_source(&self) -> DataSource {
        DataSource::new(&self.data_dir).with_extension(&self.extension)
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".almanac").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Build the resolved configuration from an optional config file
fn resolve(config_file: Option<PathBuf>, env_dir: Option<String>) -> Result<ResolvedConfig> {
    let (file_dir, extension) = match config_file {
        Some(ref config_path) => {
            let config = load_config_file(config_path)?;

            // Project root is the parent of .almanac/
            let base_dir = config_path
                .parent()
                .and_then(|p| p.parent())
                .unwrap_or(Path::new("."));

            let dir = config.data.dir.map(|dir| resolve_path(base_dir, &dir));
            (dir, config.data.extension)
        }
        None => (None, None),
    };

    let data_dir = env_dir
        .map(PathBuf::from)
        .or(file_dir)
        .unwrap_or_else(|| PathBuf::from("data"));

    Ok(ResolvedConfig {
        data_dir,
        extension: extension.unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
        config_file,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    resolve(find_config_file(), std::env::var(DATA_DIR_ENV).ok())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
