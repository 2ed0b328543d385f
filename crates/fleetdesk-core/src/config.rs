//! Configuration types for fleetdesk.
//!
//! [`Config::load`] reads `~/.config/fleetdesk/config.toml`, creating it
//! with hardcoded defaults if it does not yet exist. [`Config::defaults`]
//! returns the same defaults without touching the filesystem (useful in
//! tests).

use crate::types::PaymentSource;
use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[display]
empty_placeholder = "-"

[intake]
eml_dir = ""
sources = ["zelle", "cashapp", "venmo", "chime", "stripe"]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from
/// `~/.config/fleetdesk/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub intake: IntakeConfig,
}

/// `[display]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_empty_placeholder")]
    pub empty_placeholder: String,
}

fn default_empty_placeholder() -> String { "-".to_string() }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            empty_placeholder: default_empty_placeholder(),
        }
    }
}

/// `[intake]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct IntakeConfig {
    /// Directory `fleetdesk scan` reads `.eml` files from when no path is
    /// given. Empty means the CLI requires an explicit directory.
    #[serde(default)]
    pub eml_dir: String,
    /// Payment sources the scan accepts.
    #[serde(default = "default_sources")]
    pub sources: Vec<PaymentSource>,
}

fn default_sources() -> Vec<PaymentSource> {
    vec![
        PaymentSource::Zelle,
        PaymentSource::Cashapp,
        PaymentSource::Venmo,
        PaymentSource::Chime,
        PaymentSource::Stripe,
    ]
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            eml_dir: String::new(),
            sources: default_sources(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/fleetdesk/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not
    /// exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("fleetdesk")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
