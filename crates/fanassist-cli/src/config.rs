// Configuration loading and parsing (fanassist.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "fanassist.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// fanassist.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub wager: WagerConfig,
    pub logging: LoggingConfig,
}

/// Wager bounds applied before a lineup is priced.
#[derive(Debug, Clone, Deserialize)]
pub struct WagerConfig {
    /// Used when neither the lineup file nor the command line sets a wager.
    pub default_amount: f64,
    pub min_amount: f64,
    pub max_amount: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Directory for the log file, relative to the working directory.
    pub directory: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/fanassist.toml` relative to `base_dir`.
///
/// Does not seed defaults; prefer `load_config()`.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Seed `config/fanassist.toml` from `defaults/fanassist.toml`.
///
/// Returns the written path, or `None` when the config already exists or
/// there is no default to copy (loading then reports `FileNotFound`). An
/// existing config is never overwritten.
pub fn seed_config(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let source = base_dir.join("defaults").join(CONFIG_FILE);
    let config_dir = base_dir.join("config");
    let target = config_dir.join(CONFIG_FILE);

    if target.exists() || !source.is_file() {
        return Ok(None);
    }

    let copy_error = |action: &str, path: &Path, e: std::io::Error| ConfigError::DefaultsCopyError {
        message: format!("failed to {action} {}: {e}", path.display()),
    };

    std::fs::create_dir_all(&config_dir).map_err(|e| copy_error("create", &config_dir, e))?;
    let content = std::fs::read(&source).map_err(|e| copy_error("read", &source, e))?;

    let mut dest = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target)
    {
        Ok(dest) => dest,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(None),
        Err(e) => return Err(copy_error("create", &target, e)),
    };
    std::io::Write::write_all(&mut dest, &content).map_err(|e| copy_error("write", &target, e))?;

    Ok(Some(target))
}

/// Load config relative to the current working directory, seeding
/// `config/` from `defaults/` first.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    seed_config(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let w = &config.wager;
    let amounts: &[(&str, f64)] = &[
        ("wager.default_amount", w.default_amount),
        ("wager.min_amount", w.min_amount),
        ("wager.max_amount", w.max_amount),
    ];
    for (name, val) in amounts {
        if !val.is_finite() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: format!("must be a finite number, got {val}"),
            });
        }
    }

    if w.min_amount < 0.0 {
        return Err(ConfigError::ValidationError {
            field: "wager.min_amount".into(),
            message: format!("must be >= 0, got {}", w.min_amount),
        });
    }

    if w.max_amount < w.min_amount {
        return Err(ConfigError::ValidationError {
            field: "wager.max_amount".into(),
            message: format!(
                "must be >= wager.min_amount ({}), got {}",
                w.min_amount, w.max_amount
            ),
        });
    }

    if !(w.min_amount..=w.max_amount).contains(&w.default_amount) {
        return Err(ConfigError::ValidationError {
            field: "wager.default_amount".into(),
            message: format!(
                "must be between {} and {} inclusive, got {}",
                w.min_amount, w.max_amount, w.default_amount
            ),
        });
    }

    if config.logging.filter.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "logging.filter".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
