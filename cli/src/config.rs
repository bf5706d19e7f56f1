// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use decorcal_core::{APP_NAME, Config as CoreConfig, get_config_dir};
use tokio::fs;

const DECORCAL_CONFIG_ENV: &str = "DECORCAL_CONFIG";
const DECORCAL_DEV_ENV: &str = "DECORCAL_DEV";

const DECORCAL_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const DECORCAL_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Locates and reads the configuration file.
///
/// The `--config` flag wins over `DECORCAL_CONFIG`, which wins over the
/// user config directory. With `DECORCAL_DEV` set the user config directory
/// is never consulted.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(DECORCAL_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({DECORCAL_DEV_ENV} is set): config must be explicitly specified via --config or {DECORCAL_CONFIG_ENV} environment variable",
            ).into());
        }
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    tracing::debug!(path = %path.display(), "reading config");
    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| a.core)
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(DECORCAL_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if DECORCAL_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if DECORCAL_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            DECORCAL_DEV_ENV,
            val,
            DECORCAL_DEV_VALID_TRUE.join(", "),
            DECORCAL_DEV_VALID_FALSE.join(", "),
        );
        None
    }
}
