// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::sync::Arc;

use decorcal_client::{
    AuthToken, CancelResponse, DecorClient, KitId, KitSummary, Paged, ReservationId,
    ReserveResponse, is_authenticated,
};
use jiff::Zoned;
use jiff::civil::Date;

use crate::calendar::CalendarPage;
use crate::config::Config;
use crate::dashboard::{Dashboard, MAX_UPCOMING, load_dashboard};
use crate::token::TokenStore;
use crate::view::CalendarView;

/// DecorCal application core.
#[derive(Debug, Clone)]
pub struct DecorCal {
    today: Date,
    config: Config,
    tokens: TokenStore,
    client: DecorClient,
}

impl DecorCal {
    /// Creates a new instance with the given configuration, restoring any saved session.
    pub async fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;
        let state_dir = config
            .state_dir
            .clone()
            .ok_or("State directory is not configured")?;

        let tokens = TokenStore::open(&state_dir).await;
        let client = DecorClient::new(config.client_config(), Arc::new(tokens.clone()))?;
        Ok(Self {
            today: Zoned::now().date(),
            config,
            tokens,
            client,
        })
    }

    /// The local date the instance was created on.
    pub fn today(&self) -> Date {
        self.today
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether a usable token is stored.
    pub fn is_authenticated(&self) -> bool {
        is_authenticated(&self.tokens)
    }

    /// Logs in and stores the token for later runs.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<AuthToken, Box<dyn Error>> {
        tracing::debug!(username, "authenticating");
        let token = self.client.authenticate(username, password).await?;
        self.tokens.save(token.clone()).await?;
        self.client = self.rebuild_client()?;
        Ok(token)
    }

    /// Forgets the stored token.
    pub async fn logout(&mut self) -> Result<(), Box<dyn Error>> {
        self.tokens.clear().await?;
        self.client = self.rebuild_client()?;
        Ok(())
    }

    /// Loads the calendar page for `view`.
    ///
    /// Load failures end up in the page state, not in the returned result; the
    /// only error is a missing session, which is checked before any request.
    pub async fn calendar(&self, view: CalendarView) -> Result<CalendarPage, Box<dyn Error>> {
        self.require_session()?;

        let mut page = CalendarPage::new(self.today);
        *page.view_mut() = view;
        page.reload(&self.client, self.config.load_options()).await;
        Ok(page)
    }

    /// Kit total and the next active reservations.
    ///
    /// Unlike [`DecorCal::calendar`], a failed load is returned as an error.
    pub async fn dashboard(&self) -> Result<Dashboard, Box<dyn Error>> {
        self.require_session()?;

        let options = self.config.load_options();
        match load_dashboard(&self.client, options, MAX_UPCOMING).await {
            Ok(dashboard) => Ok(dashboard),
            Err(err) => {
                tracing::warn!(cause = %err.cause(), "dashboard load failed");
                Err(err.into())
            }
        }
    }

    /// One page of kits.
    pub async fn list_kits(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Paged<KitSummary>, Box<dyn Error>> {
        self.require_session()?;
        Ok(self.client.list_kits(page, page_size).await?)
    }

    /// Creates a kit theme.
    pub async fn create_kit(&self, name: &str) -> Result<KitSummary, Box<dyn Error>> {
        self.require_session()?;
        Ok(self.client.create_kit(name).await?)
    }

    /// Reserves a kit for an inclusive date range.
    pub async fn reserve(
        &self,
        kit_id: &KitId,
        start: Date,
        end: Date,
    ) -> Result<ReserveResponse, Box<dyn Error>> {
        self.require_session()?;
        Ok(self.client.reserve_kit(kit_id, start, end).await?)
    }

    /// Cancels a reservation.
    pub async fn cancel(
        &self,
        kit_id: &KitId,
        reservation_id: &ReservationId,
    ) -> Result<CancelResponse, Box<dyn Error>> {
        self.require_session()?;
        Ok(self
            .client
            .cancel_reservation(kit_id, reservation_id)
            .await?)
    }

    /// Client carrying the current token; the session is captured at construction.
    fn rebuild_client(&self) -> Result<DecorClient, Box<dyn Error>> {
        let client = DecorClient::new(self.config.client_config(), Arc::new(self.tokens.clone()))?;
        Ok(client)
    }

    fn require_session(&self) -> Result<(), Box<dyn Error>> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err("Not logged in, run `decorcal login <USERNAME>` first".into())
        }
    }
}
