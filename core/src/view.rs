// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Month grid, week strip and the navigation state behind them.

use jiff::ToSpan;
use jiff::civil::Date;

use crate::date::{DayKey, add_days, add_months, format_month_label, start_of_month, start_of_week};
use crate::index::DayIndex;
use crate::record::ReservationRecord;

/// Number of cells in the month grid: six full weeks.
pub const MONTH_GRID_CELLS: usize = 42;

/// Number of cells in the week strip.
pub const WEEK_CELLS: usize = 7;

/// Calendar layout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ViewMode {
    /// Six-week grid around a month.
    #[default]
    Month,

    /// Seven days around the selected day.
    Week,
}

/// A month-grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket<'a> {
    pub day: DayKey,

    /// Day of month, for the cell label.
    pub day_of_month: i8,

    /// Reservations active that day, in load order.
    pub items: Vec<&'a ReservationRecord>,

    /// Whether the day belongs to the month being viewed.
    pub is_current_month: bool,
}

/// A week-strip cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekCell {
    pub day: DayKey,
    pub day_of_month: i8,
    /// Number of reservations active that day.
    pub count: usize,
}

/// The 42 days of the grid for the month containing `reference`, starting on a Monday.
pub fn month_days(reference: Date) -> Vec<Date> {
    let grid_start = start_of_week(start_of_month(reference));
    grid_start.series(1.day()).take(MONTH_GRID_CELLS).collect()
}

/// The seven days of the Monday-first week containing `reference`.
pub fn week_days(reference: Date) -> Vec<Date> {
    let week_start = start_of_week(reference);
    week_start.series(1.day()).take(WEEK_CELLS).collect()
}

/// Month grid for the month containing `reference`.
pub fn month_grid(reference: Date, index: &DayIndex) -> Vec<DayBucket<'_>> {
    let month = (reference.year(), reference.month());
    month_days(reference)
        .into_iter()
        .map(|day| DayBucket {
            day: day.into(),
            day_of_month: day.day(),
            items: index.items_on(day),
            is_current_month: (day.year(), day.month()) == month,
        })
        .collect()
}

/// Week strip for the week containing `reference`.
pub fn week_strip(reference: Date, index: &DayIndex) -> Vec<WeekCell> {
    week_days(reference)
        .into_iter()
        .map(|day| WeekCell {
            day: day.into(),
            day_of_month: day.day(),
            count: index.count_on(day),
        })
        .collect()
}

/// Navigation state of the calendar: layout, month cursor and selected day.
///
/// All transitions are local; none of them touch the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    mode: ViewMode,
    reference: Date,
    selected: Date,
}

impl CalendarView {
    /// Month view with both the cursor and the selection on `today`.
    pub fn new(today: Date) -> Self {
        Self {
            mode: ViewMode::Month,
            reference: today,
            selected: today,
        }
    }

    pub fn with_mode(mut self, mode: ViewMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switches layout. The selected day is kept.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// The month cursor of the month view.
    pub fn reference(&self) -> Date {
        self.reference
    }

    /// Moves the month cursor to the month containing `date`.
    pub fn set_reference(&mut self, date: Date) {
        self.reference = start_of_month(date);
    }

    pub fn selected(&self) -> Date {
        self.selected
    }

    pub fn select(&mut self, day: Date) {
        self.selected = day;
    }

    /// One month back in month view, one week back in week view.
    pub fn prev(&mut self) {
        self.step(-1);
    }

    /// One month forward in month view, one week forward in week view.
    pub fn next(&mut self) {
        self.step(1);
    }

    /// Moves `n` months (month view) or `n` weeks (week view); negative goes back.
    pub fn step(&mut self, n: i32) {
        match self.mode {
            ViewMode::Month => self.reference = add_months(self.reference, n),
            ViewMode::Week => self.selected = add_days(self.selected, 7 * i64::from(n)),
        }
    }

    /// Header for the current layout.
    pub fn title(&self) -> String {
        match self.mode {
            ViewMode::Month => format_month_label(self.reference),
            ViewMode::Week => "Semana selecionada".to_string(),
        }
    }

    pub fn month_grid<'a>(&self, index: &'a DayIndex) -> Vec<DayBucket<'a>> {
        month_grid(self.reference, index)
    }

    pub fn week_strip(&self, index: &DayIndex) -> Vec<WeekCell> {
        week_strip(self.selected, index)
    }

    /// Reservations on the selected day.
    pub fn selected_items<'a>(&self, index: &'a DayIndex) -> Vec<&'a ReservationRecord> {
        index.items_on(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::{Weekday, date};

    use super::*;
    use crate::record::ReservationStatus;

    fn index(ranges: &[(&str, Date, Date)]) -> DayIndex {
        DayIndex::new(
            ranges
                .iter()
                .map(|(id, start, end)| ReservationRecord {
                    kit_id: "kit".into(),
                    kit_name: "Safari".to_string(),
                    start_date: *start,
                    end_date: *end,
                    status: ReservationStatus::Active,
                    reservation_id: (*id).into(),
                })
                .collect(),
        )
    }

    #[test]
    fn month_grid_is_six_weeks_from_monday() {
        let index = DayIndex::default();
        for year in [2023_i16, 2024] {
            for month in 1..=12 {
                let grid = month_grid(date(year, month, 15), &index);
                assert_eq!(grid.len(), MONTH_GRID_CELLS);
                assert_eq!(grid[0].day.date().weekday(), Weekday::Monday);
                assert!(grid.iter().any(|c| c.day_of_month == 1 && c.is_current_month));
            }
        }
    }

    #[test]
    fn month_grid_marks_current_month() {
        // September 2024 starts on a Sunday, so the grid opens on Aug 26.
        let index = DayIndex::default();
        let grid = month_grid(date(2024, 9, 10), &index);

        assert_eq!(grid[0].day.to_string(), "2024-08-26");
        assert!(!grid[0].is_current_month);
        assert_eq!(grid[6].day.to_string(), "2024-09-01");
        assert!(grid[6].is_current_month);
        assert_eq!(grid[41].day.to_string(), "2024-10-06");
        assert!(!grid[41].is_current_month);
        assert_eq!(grid.iter().filter(|c| c.is_current_month).count(), 30);
    }

    #[test]
    fn month_grid_fills_buckets() {
        let index = index(&[
            ("a", date(2024, 5, 9), date(2024, 5, 10)),
            ("b", date(2024, 5, 10), date(2024, 5, 10)),
        ]);
        let grid = month_grid(date(2024, 5, 1), &index);

        let cell = grid
            .iter()
            .find(|c| c.day.to_string() == "2024-05-10")
            .unwrap();
        let ids: Vec<_> = cell.items.iter().map(|r| r.reservation_id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(grid.iter().map(|c| c.items.len()).sum::<usize>(), 3);
    }

    #[test]
    fn week_strip_is_seven_days_from_monday() {
        let index = index(&[("a", date(2024, 3, 3), date(2024, 3, 5))]);
        let week = week_strip(date(2024, 3, 6), &index);

        assert_eq!(week.len(), WEEK_CELLS);
        assert_eq!(week[0].day.date(), date(2024, 3, 4));
        assert_eq!(week[0].day.date().weekday(), Weekday::Monday);
        assert_eq!(week[6].day.date(), date(2024, 3, 10));
        let counts: Vec<_> = week.iter().map(|c| c.count).collect();
        assert_eq!(counts, [1, 1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn month_navigation_normalizes_day() {
        let mut view = CalendarView::new(date(2024, 1, 15));
        view.next();
        assert_eq!(view.reference(), date(2024, 2, 1));
        view.prev();
        assert_eq!(view.reference(), date(2024, 1, 1));

        let mut view = CalendarView::new(date(2024, 1, 15));
        view.prev();
        view.next();
        assert_eq!(view.reference(), date(2024, 1, 1));

        let mut view = CalendarView::new(date(2024, 1, 31));
        view.next();
        assert_eq!(view.reference(), date(2024, 2, 1));
    }

    #[test]
    fn month_navigation_keeps_selection() {
        let mut view = CalendarView::new(date(2024, 1, 15));
        view.next();
        assert_eq!(view.selected(), date(2024, 1, 15));
    }

    #[test]
    fn week_navigation_moves_selection_by_seven_days() {
        let mut view = CalendarView::new(date(2024, 2, 27)).with_mode(ViewMode::Week);
        view.next();
        assert_eq!(view.selected(), date(2024, 3, 5));
        view.prev();
        view.prev();
        assert_eq!(view.selected(), date(2024, 2, 20));
        assert_eq!(view.reference(), date(2024, 2, 27));
    }

    #[test]
    fn extreme_steps_clamp_instead_of_panicking() {
        let mut view = CalendarView::new(date(2024, 5, 10));
        view.step(i32::MAX);
        assert_eq!(view.reference(), Date::MAX.first_of_month());
        view.step(i32::MIN);
        assert_eq!(view.reference(), Date::MIN);
        assert_eq!(view.selected(), date(2024, 5, 10));

        let mut view = CalendarView::new(date(2024, 5, 10)).with_mode(ViewMode::Week);
        view.step(i32::MAX);
        assert_eq!(view.selected(), Date::MAX);
        assert!(!view.week_strip(&DayIndex::default()).is_empty());
        view.step(i32::MIN);
        assert_eq!(view.selected(), Date::MIN);
    }

    #[test]
    fn switching_mode_preserves_selection() {
        let mut view = CalendarView::new(date(2024, 6, 1));
        view.select(date(2024, 6, 12));
        view.set_mode(ViewMode::Week);
        assert_eq!(view.selected(), date(2024, 6, 12));
        view.set_mode(ViewMode::Month);
        assert_eq!(view.selected(), date(2024, 6, 12));
    }

    #[test]
    fn selected_items_follow_selection() {
        let index = index(&[("a", date(2024, 6, 10), date(2024, 6, 12))]);
        let mut view = CalendarView::new(date(2024, 6, 1));
        assert!(view.selected_items(&index).is_empty());

        view.select(date(2024, 6, 11));
        assert_eq!(view.selected_items(&index).len(), 1);
    }

    #[test]
    fn title_depends_on_mode() {
        let view = CalendarView::new(date(2024, 3, 12));
        assert_eq!(view.title(), "março de 2024");
        assert_eq!(view.with_mode(ViewMode::Week).title(), "Semana selecionada");
    }
}
