//! Configuration for the `vital-calc` binary.
//!
//! Loaded with figment, later sources overriding earlier ones:
//! 1. Defaults
//! 2. A TOML file given with `--config`
//! 3. Environment variables prefixed with `VITAL_CALC_`, nested with `__`
//!    (e.g., `VITAL_CALC_POLICY__DAYS_PER_MONTH=31`)

use std::path::Path;

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use vital_calc::AgePolicy;

/// Environment variable prefix.
const ENV_PREFIX: &str = "VITAL_CALC_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Age unit thresholds.
    pub policy: AgePolicy,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print results as JSON instead of text.
    pub json: bool,
}

impl Config {
    /// Load configuration, optionally reading a TOML file.
    ///
    /// # Errors
    ///
    /// Fails if `path` is given but does not exist, if any source cannot be
    /// parsed, or if the resulting policy is invalid.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        Self::figment(path)?
            .extract::<Self>()
            .context("failed to load configuration")
            .and_then(|config| {
                config.validate()?;
                Ok(config)
            })
    }

    fn figment(path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file not found: {}", path.display());
            }
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Validate the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns the policy validation error, if any.
    pub fn validate(&self) -> Result<()> {
        self.policy
            .validate()
            .context("invalid [policy] configuration")
    }
}
