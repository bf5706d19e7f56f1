// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! REST client for the DecorRental backend: authentication, kits and reservations.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::similar_names, clippy::single_match_else)]

mod client;
mod config;
mod error;
mod http;
mod session;
mod types;

pub use crate::client::DecorClient;
pub use crate::config::ClientConfig;
pub use crate::error::ClientError;
pub use crate::session::{Session, StaticSession, is_authenticated};
pub use crate::types::{
    AuthToken, CancelResponse, KitDetail, KitId, KitSummary, Paged, ProblemDetails, Reservation,
    ReservationId, ReserveResponse,
};
