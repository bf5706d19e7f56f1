// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use decorcal_client::ClientConfig;

use crate::loader::LoadOptions;

/// The name of the DecorCal application.
pub const APP_NAME: &str = "decorcal";

/// Configuration for the DecorCal application.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Base URL of the backend.
    pub base_url: String,

    /// Directory for storing application state (the access token).
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// Number of kits fetched for the calendar.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Maximum number of reservations shown on the calendar.
    #[serde(default = "default_max_items")]
    pub max_items: usize,

    /// Kit details fetched concurrently.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_page_size() -> u32 {
    20
}

const fn default_max_items() -> usize {
    42
}

const fn default_concurrency() -> usize {
    4
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// A configuration for `base_url` with every other field at its default.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            state_dir: None,
            page_size: default_page_size(),
            max_items: default_max_items(),
            concurrency: default_concurrency(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".into());
        }
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();

        // Normalize state directory
        match &self.state_dir {
            Some(a) => {
                self.state_dir = Some(
                    expand_path(a)
                        .map_err(|e| format!("Failed to expand state directory path: {e}"))?,
                );
            }

            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!(err = %e, "failed to get state directory"),
            },
        }

        if self.concurrency == 0 {
            tracing::warn!("concurrency of 0 is not allowed, using 1");
            self.concurrency = 1;
        }

        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            ..Default::default()
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            page_size: self.page_size,
            max_items: self.max_items,
            concurrency: self.concurrency,
        }
    }
}

/// Handle tilde (~) and environment variables in the path
pub fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

/// User-specific configuration directory.
pub fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

fn get_state_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or_else(|| "User-specific state directory not found".into())
}
