//! CLI configuration
//!
//! Priority (highest to lowest):
//! 1. Environment variables (`RESCODE_*`, nested keys split on `__`)
//! 2. Config file (`--config <path>`, or `rescode.toml` in the working directory)
//! 3. Built-in defaults
//!
//! ```toml
//! log_level = "warn"
//!
//! [defaults]
//! band_count = 5
//! tolerance = 1
//!
//! [output]
//! color = true
//! json = false
//! ```

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml},
    Figment,
};
use resistor_code::{BandCount, Tolerance};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "rescode.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "RESCODE_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RescodeConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Values used when a command leaves them out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub band_count: BandCount,

    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub color: bool,

    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_tolerance() -> f64 {
    5.0
}

fn default_true() -> bool {
    true
}

impl Default for RescodeConfig {
    fn default() -> Self {
        Self {
            defaults: DefaultsConfig::default(),
            output: OutputConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            band_count: BandCount::default(),
            tolerance: default_tolerance(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            json: false,
        }
    }
}

impl RescodeConfig {
    /// Configured default tolerance as a table entry
    pub fn default_tolerance(&self) -> Result<Tolerance> {
        Tolerance::from_percent(self.defaults.tolerance).with_context(|| {
            format!(
                "defaults.tolerance = {} is not one of 0.1, 0.25, 0.5, 1, 2, 5, 10",
                self.defaults.tolerance
            )
        })
    }

    fn validate(&self) -> Result<()> {
        self.default_tolerance()?;
        if self.log_level.trim().is_empty() {
            bail!("log_level must not be empty");
        }
        Ok(())
    }
}

/// Load configuration from defaults, file and `RESCODE_*` environment
pub fn load_config(path: Option<&Path>) -> Result<RescodeConfig> {
    load_config_with_prefix(path, ENV_PREFIX)
}

fn load_config_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<RescodeConfig> {
    let mut figment = Figment::from(Serialized::defaults(RescodeConfig::default()));

    figment = match path {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            let extension = path
                .extension()
                .and_then(|s| s.to_str())
                .context("Config file must have an extension")?;
            match extension {
                "toml" => figment.merge(Toml::file(path)),
                "json" => figment.merge(Json::file(path)),
                other => bail!("Unsupported config file format: {}", other),
            }
        },
        // optional: silently skipped when absent
        None => figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
    };

    let config: RescodeConfig = figment
        .merge(Env::prefixed(env_prefix).split("__"))
        .extract()
        .context("Failed to load configuration")?;

    config.validate()?;
    debug!(?config, "configuration loaded");
    Ok(config)
}
