// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Session state handed to the client at construction.

use std::fmt;

/// Source of the bearer token attached to backend requests.
pub trait Session: fmt::Debug + Send + Sync {
    /// The current access token, if the user is logged in.
    fn token(&self) -> Option<String>;
}

/// Whether the session carries a token. Protected operations check this before
/// touching the network.
pub fn is_authenticated(session: &dyn Session) -> bool {
    session.token().is_some_and(|t| !t.is_empty())
}

/// A session with a fixed token, or none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSession(Option<String>);

impl StaticSession {
    /// Session holding the given token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    /// Session without a token.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self(None)
    }
}

impl Session for StaticSession {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}
