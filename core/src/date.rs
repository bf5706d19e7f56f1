// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Civil-date helpers and the canonical day key.
//!
//! All arithmetic happens on [`jiff::civil::Date`]; strings only appear when a
//! [`DayKey`] is printed or parsed.

use std::fmt;
use std::str::FromStr;

use jiff::{Span, ToSpan};
use jiff::civil::{Date, Weekday};

/// Stable text form of a day key.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Weekday headers for a Monday-first week.
pub const WEEKDAY_LABELS: [&str; 7] = ["Seg", "Ter", "Qua", "Qui", "Sex", "Sáb", "Dom"];

const MONTH_NAMES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Canonical identifier of a calendar day, printed as `YYYY-MM-DD`.
///
/// Ordering follows the calendar, which for four-digit years is also the
/// lexicographic order of the text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey(Date);

impl DayKey {
    /// Creates a key for the given date.
    pub const fn new(date: Date) -> Self {
        Self(date)
    }

    /// The date this key stands for.
    pub const fn date(self) -> Date {
        self.0
    }
}

impl From<Date> for DayKey {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl From<DayKey> for Date {
    fn from(key: DayKey) -> Self {
        key.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime(DAY_KEY_FORMAT))
    }
}

impl FromStr for DayKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid date '{s}', expected YYYY-MM-DD");
        if s.len() != 10 {
            return Err(invalid());
        }
        Date::strptime(DAY_KEY_FORMAT, s)
            .map(Self)
            .map_err(|_| invalid())
    }
}

impl serde::Serialize for DayKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for DayKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// First day of the month containing `date`.
pub fn start_of_month(date: Date) -> Date {
    date.first_of_month()
}

/// Monday of the week containing `date`.
///
/// Sunday steps back six days; any other weekday steps back `weekday - 1` days.
pub fn start_of_week(date: Date) -> Date {
    let offset = match date.weekday() {
        Weekday::Sunday => -6,
        weekday => 1 - i64::from(weekday.to_sunday_zero_offset()),
    };
    date.saturating_add(offset.days())
}

/// Shifts by whole months, landing on the first day of the resulting month.
///
/// Normalizing first keeps month-end dates from skipping a month, so Jan 31
/// plus one month is Feb 1.
///
/// Clamps to the first or last representable month instead of overflowing.
pub fn add_months(date: Date, months: i32) -> Date {
    let shifted = match Span::new().try_months(months) {
        Ok(span) => date.first_of_month().saturating_add(span),
        Err(_) => clamp_to(months < 0),
    };
    shifted.first_of_month()
}

/// Shifts by whole days, clamping at the representable range.
pub fn add_days(date: Date, days: i64) -> Date {
    match Span::new().try_days(days) {
        Ok(span) => date.saturating_add(span),
        Err(_) => clamp_to(days < 0),
    }
}

fn clamp_to(backwards: bool) -> Date {
    if backwards { Date::MIN } else { Date::MAX }
}

/// Day rendered as `dd/mm/yyyy`.
pub fn format_date(date: Date) -> String {
    date.strftime("%d/%m/%Y").to_string()
}

/// Inclusive range rendered as `dd/mm/yyyy - dd/mm/yyyy`.
pub fn format_range(start: Date, end: Date) -> String {
    format!("{} - {}", format_date(start), format_date(end))
}

/// Month header, e.g. `março de 2024`.
pub fn format_month_label(date: Date) -> String {
    let name = usize::try_from(date.month() - 1)
        .ok()
        .and_then(|i| MONTH_NAMES.get(i))
        .copied()
        .unwrap_or_default();
    format!("{name} de {}", date.year())
}
