// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Reservation calendar for rental-kit bookings: loading, day index and views.

mod app;
mod calendar;
mod config;
mod dashboard;
mod date;
mod index;
mod loader;
mod range;
mod record;
mod token;
mod view;

pub use crate::app::DecorCal;
pub use crate::calendar::{CalendarPage, LoadState};
pub use crate::config::{APP_NAME, Config, expand_path, get_config_dir};
pub use crate::dashboard::{Dashboard, DashboardError, MAX_UPCOMING, load_dashboard};
pub use crate::date::{
    DAY_KEY_FORMAT, DayKey, WEEKDAY_LABELS, add_days, add_months, format_date, format_month_label,
    format_range, start_of_month, start_of_week,
};
pub use crate::index::DayIndex;
pub use crate::loader::{LoadError, LoadOptions, ReservationSource, load_records};
pub use crate::range::expand_range;
pub use crate::record::{ReservationRecord, ReservationStatus};
pub use crate::token::TokenStore;
pub use crate::view::{
    CalendarView, DayBucket, MONTH_GRID_CELLS, ViewMode, WEEK_CELLS, WeekCell, month_days,
    month_grid, week_days, week_strip,
};

pub use decorcal_client::{
    AuthToken, CancelResponse, ClientError, KitDetail, KitId, KitSummary, Paged, Reservation,
    ReservationId, ReserveResponse,
};
