// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Kit totals and the next active reservations.

use decorcal_client::ClientError;

use crate::loader::{LoadOptions, ReservationSource, fetch_sorted};
use crate::record::ReservationRecord;

/// Active reservations listed on the dashboard.
pub const MAX_UPCOMING: usize = 6;

/// Summary of the first kit page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Kits known to the backend, across all pages.
    pub kit_count: u64,

    /// Active reservations by start date, at most the requested cap.
    pub upcoming: Vec<ReservationRecord>,
}

impl Dashboard {
    pub fn active_count(&self) -> usize {
        self.upcoming.len()
    }

    /// One-line occupancy status, e.g. `3 reservas ativas`.
    pub fn occupancy_label(&self) -> String {
        if self.kit_count == 0 {
            "Sem kits cadastrados".to_string()
        } else if self.upcoming.is_empty() {
            "Nenhuma reserva ativa".to_string()
        } else {
            format!("{} reservas ativas", self.upcoming.len())
        }
    }
}

/// A dashboard load failed. Nothing is shown.
#[derive(Debug, thiserror::Error)]
#[error("Could not load the dashboard.")]
pub struct DashboardError {
    #[source]
    source: ClientError,
}

impl DashboardError {
    pub fn cause(&self) -> &ClientError {
        &self.source
    }
}

impl From<ClientError> for DashboardError {
    fn from(source: ClientError) -> Self {
        Self { source }
    }
}

/// Loads the kit total and the first `cap` active reservations.
///
/// Uses the same single kit page and fan-out as the calendar. Cancelled and
/// unknown statuses are dropped before the cap applies.
#[tracing::instrument(skip(source))]
pub async fn load_dashboard<S>(
    source: &S,
    options: LoadOptions,
    cap: usize,
) -> Result<Dashboard, DashboardError>
where
    S: ReservationSource + ?Sized,
{
    let (kit_count, records) = fetch_sorted(source, options).await?;
    let upcoming: Vec<_> = records
        .into_iter()
        .filter(|r| r.status.is_active())
        .take(cap)
        .collect();

    tracing::debug!(kit_count, upcoming = upcoming.len(), "dashboard loaded");
    Ok(Dashboard {
        kit_count,
        upcoming,
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::record::ReservationStatus;

    fn record(id: &str) -> ReservationRecord {
        ReservationRecord {
            kit_id: "kit-1".into(),
            kit_name: "Safari".to_string(),
            start_date: date(2024, 5, 10),
            end_date: date(2024, 5, 12),
            status: ReservationStatus::Active,
            reservation_id: id.into(),
        }
    }

    #[test]
    fn occupancy_label_covers_each_case() {
        let mut dashboard = Dashboard {
            kit_count: 0,
            upcoming: vec![],
        };
        assert_eq!(dashboard.occupancy_label(), "Sem kits cadastrados");

        dashboard.kit_count = 3;
        assert_eq!(dashboard.occupancy_label(), "Nenhuma reserva ativa");

        dashboard.upcoming = vec![record("r1"), record("r2")];
        assert_eq!(dashboard.occupancy_label(), "2 reservas ativas");
        assert_eq!(dashboard.active_count(), 2);
    }
}
