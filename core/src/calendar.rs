// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::index::DayIndex;
use crate::loader::{LoadError, LoadOptions, ReservationSource, load_records};
use crate::record::ReservationRecord;
use crate::view::{CalendarView, DayBucket, WeekCell};

/// Network state of the calendar page.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// A load is in flight.
    #[default]
    Loading,

    /// Records are loaded and indexed.
    Loaded(DayIndex),

    /// The last load failed; holds the message shown to the user.
    Errored(String),
}

/// The calendar page: load state plus navigation.
///
/// Navigation works in every state; views are empty until a load succeeds.
#[derive(Debug, Clone)]
pub struct CalendarPage {
    state: LoadState,
    view: CalendarView,
}

impl CalendarPage {
    /// A page in `Loading` state with the selection on `today`.
    pub fn new(today: Date) -> Self {
        Self {
            state: LoadState::Loading,
            view: CalendarView::new(today),
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn view(&self) -> &CalendarView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut CalendarView {
        &mut self.view
    }

    /// Loaded index, if any.
    pub fn index(&self) -> Option<&DayIndex> {
        match &self.state {
            LoadState::Loaded(index) => Some(index),
            _ => None,
        }
    }

    /// Fetches and indexes records from `source`.
    ///
    /// State is only written once the fetch completes, so dropping this future
    /// midway leaves the page as it was.
    pub async fn reload<S>(&mut self, source: &S, options: LoadOptions)
    where
        S: ReservationSource + ?Sized,
    {
        let result = load_records(source, options).await;
        self.finish(result);
    }

    /// Applies the outcome of a load started elsewhere.
    pub fn finish(&mut self, result: Result<Vec<ReservationRecord>, LoadError>) {
        self.state = match result {
            Ok(records) => LoadState::Loaded(DayIndex::new(records)),
            Err(err) => {
                tracing::warn!(cause = %err.cause(), "calendar load failed");
                LoadState::Errored(err.to_string())
            }
        };
    }

    /// Month grid for the current cursor, empty unless loaded.
    pub fn month_grid(&self) -> Vec<DayBucket<'_>> {
        self.index()
            .map(|index| self.view.month_grid(index))
            .unwrap_or_default()
    }

    /// Week strip around the selected day, empty unless loaded.
    pub fn week_strip(&self) -> Vec<WeekCell> {
        self.index()
            .map(|index| self.view.week_strip(index))
            .unwrap_or_default()
    }

    /// Reservations on the selected day, empty unless loaded.
    pub fn selected_items(&self) -> Vec<&ReservationRecord> {
        self.index()
            .map(|index| self.view.selected_items(index))
            .unwrap_or_default()
    }

    /// Number of active reservations, zero unless loaded.
    pub fn active_count(&self) -> usize {
        self.index().map_or(0, DayIndex::active_count)
    }
}
