// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Backend client for kit and reservation operations.

use std::sync::Arc;

use jiff::civil::Date;
use reqwest::Method;
use serde_json::json;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::HttpClient;
use crate::session::{Session, is_authenticated};
use crate::types::{
    AuthToken, CancelResponse, KitDetail, KitId, KitSummary, Paged, Reservation, ReservationId,
    ReserveResponse,
};

/// Client for the DecorRental REST backend.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use decorcal_client::{ClientConfig, DecorClient, StaticSession};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ClientConfig::new("https://api.example.com");
/// let client = DecorClient::new(config, Arc::new(StaticSession::new("token")))?;
/// let kits = client.list_kits(1, 20).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DecorClient {
    http: Arc<HttpClient>,
}

impl DecorClient {
    /// Creates a new client bound to `session`.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: ClientConfig, session: Arc<dyn Session>) -> Result<Self, ClientError> {
        let http = HttpClient::new(config, session)?;
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Whether the client's session carries a token.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        is_authenticated(self.http.session())
    }

    /// Exchanges credentials for an access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are rejected or the request fails.
    #[tracing::instrument(skip(self, password))]
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthToken, ClientError> {
        let body = json!({ "username": username, "password": password });
        let req = self
            .http
            .build_request(Method::POST, &["api", "auth", "token"])
            .body(body.to_string());
        self.http.execute_json(req).await
    }

    /// Lists one page of kits.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[tracing::instrument(skip(self))]
    pub async fn list_kits(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Paged<KitSummary>, ClientError> {
        self.ensure_authenticated()?;
        let req = self
            .http
            .build_request(Method::GET, &["api", "kits"])
            .query(&[("page", page), ("pageSize", page_size)]);
        self.http.execute_json(req).await
    }

    /// Creates a new kit theme.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the request fails.
    #[tracing::instrument(skip(self))]
    pub async fn create_kit(&self, name: &str) -> Result<KitSummary, ClientError> {
        self.ensure_authenticated()?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ClientError::InvalidInput("kit name is required".to_string()));
        }

        let req = self
            .http
            .build_request(Method::POST, &["api", "kits"])
            .body(json!({ "name": name }).to_string());
        self.http.execute_json(req).await
    }

    /// Gets a kit with its nested reservations.
    ///
    /// # Errors
    ///
    /// Returns an error if the kit doesn't exist or the response is malformed.
    #[tracing::instrument(skip(self), fields(kit = %id))]
    pub async fn get_kit(&self, id: &KitId) -> Result<KitDetail, ClientError> {
        self.ensure_authenticated()?;
        let req = self
            .http
            .build_request(Method::GET, &["api", "kits", id.as_str()]);
        self.http.execute_json(req).await
    }

    /// Lists the reservations of a kit.
    ///
    /// # Errors
    ///
    /// Returns an error if the kit doesn't exist or the response is malformed.
    #[tracing::instrument(skip(self), fields(kit = %id))]
    pub async fn get_kit_reservations(&self, id: &KitId) -> Result<Vec<Reservation>, ClientError> {
        self.ensure_authenticated()?;
        let segments = ["api", "kits", id.as_str(), "reservations"];
        let req = self.http.build_request(Method::GET, &segments);
        self.http.execute_json(req).await
    }

    /// Reserves a kit for the inclusive range `[start, end]`.
    ///
    /// The backend decides whether stock is available; the only client-side check
    /// is that the range is not inverted.
    ///
    /// # Errors
    ///
    /// Returns an error if `end` is before `start` or the backend rejects the reservation.
    #[tracing::instrument(skip(self), fields(kit = %kit_id))]
    pub async fn reserve_kit(
        &self,
        kit_id: &KitId,
        start: Date,
        end: Date,
    ) -> Result<ReserveResponse, ClientError> {
        self.ensure_authenticated()?;
        if end < start {
            return Err(ClientError::InvalidInput(format!(
                "end date {end} is before start date {start}"
            )));
        }

        let body = json!({ "startDate": start.to_string(), "endDate": end.to_string() });
        let req = self
            .http
            .build_request(Method::POST, &["api", "kits", kit_id.as_str(), "reservations"])
            .body(body.to_string());
        self.http.execute_json(req).await
    }

    /// Cancels a reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the reservation doesn't exist or cannot be cancelled.
    #[tracing::instrument(skip(self), fields(kit = %kit_id, reservation = %reservation_id))]
    pub async fn cancel_reservation(
        &self,
        kit_id: &KitId,
        reservation_id: &ReservationId,
    ) -> Result<CancelResponse, ClientError> {
        self.ensure_authenticated()?;
        let segments = [
            "api",
            "kits",
            kit_id.as_str(),
            "reservations",
            reservation_id.as_str(),
            "cancel",
        ];
        let req = self.http.build_request(Method::POST, &segments);
        self.http.execute_json(req).await
    }

    fn ensure_authenticated(&self) -> Result<(), ClientError> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(ClientError::Unauthenticated)
        }
    }
}
