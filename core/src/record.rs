// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use decorcal_client::{KitDetail, KitId, Reservation, ReservationId};
use jiff::civil::Date;

use crate::date::format_range;

/// Status of a reservation as reported by the backend.
///
/// Unknown values are kept verbatim in [`ReservationStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReservationStatus {
    /// The reservation holds the kit.
    Active,

    /// The reservation was cancelled.
    Cancelled,

    /// Any other status string.
    Other(String),
}

impl ReservationStatus {
    /// The backend string for this status.
    pub fn as_str(&self) -> &str {
        match self {
            ReservationStatus::Active => "Active",
            ReservationStatus::Cancelled => "Cancelled",
            ReservationStatus::Other(s) => s,
        }
    }

    /// Display label. Unknown statuses pass through unchanged.
    pub fn label(&self) -> &str {
        match self {
            ReservationStatus::Active => "Ativo",
            ReservationStatus::Cancelled => "Cancelado",
            ReservationStatus::Other(s) => s,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ReservationStatus::Active)
    }
}

impl From<&str> for ReservationStatus {
    fn from(s: &str) -> Self {
        match s {
            "Active" => ReservationStatus::Active,
            "Cancelled" => ReservationStatus::Cancelled,
            other => ReservationStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for ReservationStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Active" => ReservationStatus::Active,
            "Cancelled" => ReservationStatus::Cancelled,
            _ => ReservationStatus::Other(s),
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for ReservationStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A reservation flattened out of its kit, as shown on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRecord {
    /// Kit the reservation belongs to.
    pub kit_id: KitId,

    /// Display name of the kit.
    pub kit_name: String,

    /// First day, inclusive.
    pub start_date: Date,

    /// Last day, inclusive. Not guaranteed to be on or after `start_date`.
    pub end_date: Date,

    pub status: ReservationStatus,

    pub reservation_id: ReservationId,
}

impl ReservationRecord {
    /// Tags a reservation with its kit.
    pub fn new(kit_id: KitId, kit_name: String, reservation: Reservation) -> Self {
        Self {
            kit_id,
            kit_name,
            start_date: reservation.start_date,
            end_date: reservation.end_date,
            status: reservation.status.into(),
            reservation_id: reservation.id,
        }
    }

    /// All reservations of a kit, in backend order.
    pub fn from_kit(kit: KitDetail) -> Vec<Self> {
        let KitDetail {
            id,
            name,
            reservations,
        } = kit;
        reservations
            .into_iter()
            .map(|r| Self::new(id.clone(), name.clone(), r))
            .collect()
    }

    /// Formatted range, `dd/mm/yyyy - dd/mm/yyyy`.
    pub fn range(&self) -> String {
        format_range(self.start_date, self.end_date)
    }
}
