//! Layered CLI configuration: defaults, then `fieldrules.toml`, then
//! `FIELDRULES_*` environment variables, then flags.

use std::path::{Path, PathBuf};

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use fieldrules_validator::{DatePattern, ValidatorConfig};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "fieldrules.toml";

/// Prefix of the environment variables read into [`CliConfig`].
pub const ENV_PREFIX: &str = "FIELDRULES_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Canonical date layout (`FIELDRULES_DATE_PATTERN`).
    pub date_pattern: DatePattern,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            date_pattern: ValidatorConfig::default().canonical_date_pattern,
        }
    }
}

/// Values given on the command line; unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_pattern: Option<DatePattern>,
}

impl CliConfig {
    /// Loads the configuration layers, `overrides` last.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>, overrides: &CliOverrides) -> anyhow::Result<Self> {
        let file = match path {
            Some(path) => {
                anyhow::ensure!(path.exists(), "config file {} not found", path.display());
                path.to_path_buf()
            }
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(&file))
            .merge(Env::prefixed(ENV_PREFIX).only(&["date_pattern"]))
            .merge(Serialized::defaults(overrides))
            .extract()
            .with_context(|| format!("invalid configuration (file {})", file.display()))?;

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Engine configuration derived from these settings.
    #[must_use]
    pub fn validator_config(&self) -> ValidatorConfig {
        ValidatorConfig::default().with_canonical_date_pattern(self.date_pattern)
    }
}
