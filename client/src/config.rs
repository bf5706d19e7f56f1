// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Backend connection settings.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend, without the `/api` prefix.
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("decorcal-client/", env!("CARGO_PKG_VERSION")).to_string()
}

impl ClientConfig {
    /// Creates a configuration for the given base URL with default timeout and user agent.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_deserialize_fills_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{ "base_url": "http://localhost:5000" }"#).unwrap();

        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("decorcal-client/"));
    }
}
