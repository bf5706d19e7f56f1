// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Fetching kits and flattening their reservations.

use async_trait::async_trait;
use decorcal_client::{ClientError, DecorClient, KitDetail, KitId, KitSummary, Paged};
use futures::{StreamExt, TryStreamExt, stream};

use crate::record::ReservationRecord;

/// Where kits and their reservations come from.
#[async_trait]
pub trait ReservationSource: Send + Sync {
    /// One page of kits.
    async fn list_kits(&self, page: u32, page_size: u32)
    -> Result<Paged<KitSummary>, ClientError>;

    /// A kit with its nested reservations.
    async fn get_kit(&self, id: &KitId) -> Result<KitDetail, ClientError>;
}

#[async_trait]
impl ReservationSource for DecorClient {
    async fn list_kits(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Paged<KitSummary>, ClientError> {
        DecorClient::list_kits(self, page, page_size).await
    }

    async fn get_kit(&self, id: &KitId) -> Result<KitDetail, ClientError> {
        DecorClient::get_kit(self, id).await
    }
}

/// Bounds applied to a calendar load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Size of the single kit page that is fetched.
    pub page_size: u32,

    /// Records kept after sorting.
    pub max_items: usize,

    /// Kit details fetched at the same time.
    pub concurrency: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            page_size: 20,
            max_items: 42,
            concurrency: 4,
        }
    }
}

/// A calendar load failed. The whole load is discarded.
#[derive(Debug, thiserror::Error)]
#[error("Could not load the calendar.")]
pub struct LoadError {
    #[source]
    source: ClientError,
}

impl LoadError {
    /// The client error that aborted the load.
    pub fn cause(&self) -> &ClientError {
        &self.source
    }
}

impl From<ClientError> for LoadError {
    fn from(source: ClientError) -> Self {
        Self { source }
    }
}

/// Loads the reservations of the first page of kits.
///
/// Kit details are fetched with at most `concurrency` requests in flight; the
/// first failure aborts the load. Records come back sorted by start date and
/// capped at `max_items`.
#[tracing::instrument(skip(source))]
pub async fn load_records<S>(
    source: &S,
    options: LoadOptions,
) -> Result<Vec<ReservationRecord>, LoadError>
where
    S: ReservationSource + ?Sized,
{
    let (_, mut records) = fetch_sorted(source, options).await?;
    records.truncate(options.max_items);

    tracing::debug!(records = records.len(), "calendar records loaded");
    Ok(records)
}

/// The kit total reported by the backend and every reservation of the first
/// kit page, sorted by start date but not capped.
pub(crate) async fn fetch_sorted<S>(
    source: &S,
    options: LoadOptions,
) -> Result<(u64, Vec<ReservationRecord>), ClientError>
where
    S: ReservationSource + ?Sized,
{
    let kits = source.list_kits(1, options.page_size).await?;
    tracing::debug!(kits = kits.items.len(), total = kits.total_count, "fetching kit details");

    // futures are lazy; collected up front so the stream holds no closure
    let requests: Vec<_> = kits.items.iter().map(|kit| source.get_kit(&kit.id)).collect();
    let details: Vec<KitDetail> = stream::iter(requests)
        .buffered(options.concurrency.max(1))
        .try_collect()
        .await?;

    let mut records: Vec<_> = details
        .into_iter()
        .flat_map(ReservationRecord::from_kit)
        .collect();

    // stable, so equal start dates keep fetch order
    records.sort_by_key(|r| r.start_date);
    Ok((kits.total_count, records))
}
