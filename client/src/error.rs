// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use reqwest::StatusCode;

use crate::types::ProblemDetails;

/// Backend client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport failure: connection refused, timeout, TLS, ...
    #[error("HTTP error: {0}")]
    Http(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Api {
        /// Response status code.
        status: StatusCode,
        /// Human readable message, from the problem details when available.
        message: String,
        /// Problem details body, if the backend sent one.
        problem: Option<Box<ProblemDetails>>,
    },

    /// The response body could not be decoded.
    #[error("Invalid server response: {0}")]
    Decode(String),

    /// The session has no token for an endpoint that requires one.
    #[error("Not logged in")]
    Unauthenticated,

    /// The request was rejected before being sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Status code of an API error, if any.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Http(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
