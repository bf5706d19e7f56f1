// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use decorcal_client::{AuthToken, Session};
use jiff::Timestamp;
use tokio::fs;

const TOKEN_FILE: &str = "token.json";

/// File-backed session: the access token is the only state kept between runs.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
    token: Option<AuthToken>,
}

impl TokenStore {
    /// Opens the store in `state_dir`, reading a previously saved token if any.
    ///
    /// An unreadable or corrupt token file is treated as logged out.
    pub async fn open(state_dir: &Path) -> Self {
        let path = state_dir.join(TOKEN_FILE);
        let token = match fs::read_to_string(&path).await {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(token) => Some(token),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "ignoring corrupt token file");
                    None
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "failed to read token file");
                None
            }
        };
        Self { path, token }
    }

    /// Persists `token`, replacing any previous one.
    pub async fn save(&mut self, token: AuthToken) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| format!("Failed to create state directory: {e}"))?;
        }
        let content = serde_json::to_string_pretty(&token)?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| format!("Failed to write token file: {e}"))?;

        tracing::debug!(path = %self.path.display(), "token saved");
        self.token = Some(token);
        Ok(())
    }

    /// Forgets the token and removes the file.
    pub async fn clear(&mut self) -> Result<(), Box<dyn Error>> {
        self.token = None;
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(format!("Failed to remove token file: {e}").into()),
        }
    }

    /// The stored token, including an expired one.
    pub fn auth_token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Session for TokenStore {
    fn token(&self) -> Option<String> {
        let token = self.token.as_ref()?;
        // unparsable expiry: let the backend decide
        match token.expires_at_utc.parse::<Timestamp>() {
            Ok(expires_at) if expires_at <= Timestamp::now() => None,
            _ => Some(token.access_token.clone()),
        }
    }
}
