// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::ops::Deref;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Creates a new `", stringify!($name), "` from a string.")]
            #[must_use]
            pub const fn new(id: String) -> Self {
                Self(id)
            }

            /// Returns the inner string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

string_id!(
    /// Identifier of a kit theme.
    KitId
);

string_id!(
    /// Identifier of a reservation, stable for its lifetime.
    ReservationId
);

/// Access token returned by `POST /api/auth/token`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthToken {
    /// The bearer token.
    pub access_token: String,
    /// Expiry instant as sent by the backend (UTC, RFC 3339).
    pub expires_at_utc: String,
    /// Token type, usually `Bearer`.
    #[serde(default)]
    pub token_type: String,
    /// Role granted to the user.
    #[serde(default)]
    pub role: String,
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// One-based page number.
    pub page: u32,
    /// Requested page size.
    pub page_size: u32,
    /// Total number of items across all pages.
    pub total_count: u64,
}

/// Kit as it appears in listings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KitSummary {
    /// Kit identifier.
    pub id: KitId,
    /// Display name.
    pub name: String,
}

/// Kit with its reservations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KitDetail {
    /// Kit identifier.
    pub id: KitId,
    /// Display name.
    pub name: String,
    /// Reservations of this kit, in backend order.
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

/// A reservation of a kit over an inclusive date range.
///
/// Dates are decoded as civil dates; a payload with a non `YYYY-MM-DD` date
/// fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Reservation identifier.
    pub id: ReservationId,
    /// Category of the kit that was booked.
    #[serde(default)]
    pub kit_category_id: Option<String>,
    /// First day, inclusive.
    pub start_date: Date,
    /// Last day, inclusive.
    pub end_date: Date,
    /// Status string, e.g. `Active` or `Cancelled`.
    pub status: String,
    /// Whether an operator approved this reservation despite insufficient stock.
    #[serde(default)]
    pub is_stock_override: bool,
    /// Reason given for the stock override.
    #[serde(default)]
    pub stock_override_reason: Option<String>,
    /// Customer name.
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Customer phone number.
    #[serde(default)]
    pub customer_phone_number: Option<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Result of `POST /api/kits/{id}/reservations`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveResponse {
    /// New reservation identifier.
    pub reservation_id: ReservationId,
    /// Kit the reservation belongs to.
    pub kit_theme_id: KitId,
    /// First day, inclusive.
    pub start_date: Date,
    /// Last day, inclusive.
    pub end_date: Date,
    /// Status of the new reservation.
    pub status: String,
    /// Whether the reservation was created as a stock override.
    #[serde(default)]
    pub is_stock_override: bool,
    /// Backend message.
    #[serde(default)]
    pub message: String,
}

/// Result of `POST /api/kits/{id}/reservations/{id}/cancel`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelResponse {
    /// Cancelled reservation.
    pub reservation_id: ReservationId,
    /// Kit the reservation belongs to.
    pub kit_theme_id: KitId,
    /// Status after cancellation.
    pub status: String,
    /// Backend message.
    #[serde(default)]
    pub message: String,
}

/// RFC 7807 problem details sent by the backend on errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProblemDetails {
    /// Problem type URI.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Short summary.
    pub title: Option<String>,
    /// Status code repeated in the body.
    pub status: Option<u16>,
    /// Human readable explanation.
    pub detail: Option<String>,
    /// Instance URI.
    pub instance: Option<String>,
    /// Application error code.
    pub code: Option<String>,
    /// Trace identifier for support.
    pub trace_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kit_detail_decodes_camel_case_reservations() {
        let json = r#"{
            "id": "kit-1",
            "name": "Safari",
            "reservations": [{
                "id": "res-1",
                "kitCategoryId": "cat-1",
                "startDate": "2024-03-30",
                "endDate": "2024-04-02",
                "status": "Active",
                "isStockOverride": true,
                "customerName": "Ana"
            }]
        }"#;

        let kit: KitDetail = serde_json::from_str(json).unwrap();

        assert_eq!(kit.id.as_str(), "kit-1");
        let res = &kit.reservations[0];
        assert_eq!(res.start_date, jiff::civil::date(2024, 3, 30));
        assert_eq!(res.end_date, jiff::civil::date(2024, 4, 2));
        assert!(res.is_stock_override);
        assert_eq!(res.customer_name.as_deref(), Some("Ana"));
    }

    #[test]
    fn reservation_rejects_malformed_date() {
        let json = r#"{ "id": "r", "startDate": "30/03/2024", "endDate": "2024-04-02", "status": "Active" }"#;
        assert!(serde_json::from_str::<Reservation>(json).is_err());
    }

    #[test]
    fn problem_details_tolerates_missing_fields() {
        let problem: ProblemDetails = serde_json::from_str(r#"{ "detail": "Kit not found" }"#).unwrap();
        assert_eq!(problem.detail.as_deref(), Some("Kit not found"));
        assert_eq!(problem.title, None);
    }
}
