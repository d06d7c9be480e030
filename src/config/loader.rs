//! Targets file location, seeding and loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::registry::{ConfigRegistry, ParseResult};

/// Entry written to a freshly created targets file.
pub const DEFAULT_ENTRIES: &str = ".c gcc -o$project\n";

/// Errors that can occur when locating or loading the targets file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read targets file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create default targets file '{path}': {source}")]
    CreateError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Targets file '{path}' exists as something other than a regular file")]
    NotAFile { path: PathBuf },

    #[error("syntax error on line {line}: expected program name after extension '{extension}'")]
    MissingProgram { line: usize, extension: String },

    #[error("syntax error on line {line}: '>' for extension '{extension}' has no redirect target")]
    MissingRedirect { line: usize, extension: String },
}

/// A parsed targets file and where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub registry: ConfigRegistry,
    pub warnings: Vec<String>,
    /// The file did not exist and was created with [`DEFAULT_ENTRIES`].
    pub seeded: bool,
}

/// Returns the default path of the targets file.
///
/// Uses `~/.compile/targets`; falls back to the current directory if the
/// home directory is unavailable.
pub fn default_targets_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".compile").join("targets")
}

/// Loads the targets file at `path`, creating it with the default entry
/// when it does not exist yet.
pub fn load(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let seeded = match fs::metadata(path) {
        Ok(meta) if meta.is_file() => false,
        Ok(_) => {
            return Err(ConfigError::NotAFile {
                path: path.to_path_buf(),
            })
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            seed(path)?;
            true
        }
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let ParseResult { registry, warnings } = ConfigRegistry::parse(&content)?;
    tracing::info!(
        "Loaded {} compiler entries from {}",
        registry.len(),
        path.display()
    );

    Ok(LoadedConfig {
        path: path.to_path_buf(),
        registry,
        warnings,
        seeded,
    })
}

fn seed(path: &Path) -> Result<(), ConfigError> {
    let create_error = |source| ConfigError::CreateError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(create_error)?;
    }
    fs::write(path, DEFAULT_ENTRIES).map_err(create_error)?;

    tracing::info!("Created default targets file at {}", path.display());
    Ok(())
}
