// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with bearer authentication and problem-details handling.

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::session::Session;
use crate::types::ProblemDetails;

/// HTTP client for backend operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    base: Url,
    session: Arc<dyn Session>,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute http(s) URL or HTTP
    /// client creation fails.
    pub fn new(config: ClientConfig, session: Arc<dyn Session>) -> Result<Self, ClientError> {
        if config.base_url.is_empty() {
            return Err(ClientError::Config("base_url must not be empty".to_string()));
        }

        let base = Url::parse(&config.base_url)
            .map_err(|e| ClientError::Config(format!("invalid base_url: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::Config(format!("base_url is not an http(s) URL: {base}")));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            base,
            session,
        })
    }

    pub fn session(&self) -> &dyn Session {
        self.session.as_ref()
    }

    /// Builds a request against the path made of `segments`, attaching the
    /// bearer token when the session has one.
    ///
    /// Each segment is percent-encoded on its own, so an id containing `/`, `?`
    /// or `#` stays inside its segment.
    pub fn build_request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }

        let mut req = self
            .client
            .request(method, url)
            .header("Content-Type", "application/json");

        if let Some(token) = self.session.token() {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Executes a request and checks for HTTP errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error status code.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, ClientError> {
        let resp = req.send().await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let text = resp.text().await.unwrap_or_default();
        let problem = serde_json::from_str::<ProblemDetails>(&text).ok();
        let message = problem
            .as_ref()
            .and_then(|p| p.detail.clone())
            .unwrap_or_else(|| format!("request failed ({})", status.as_u16()));

        tracing::debug!(%status, message, "backend returned an error");
        Err(ClientError::Api {
            status,
            message,
            problem: problem.map(Box::new),
        })
    }

    /// Executes a request and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not the expected JSON.
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<T, ClientError> {
        let resp = self.execute(req).await?;
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
