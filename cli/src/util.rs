// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use decorcal_core::DayKey;
use jiff::civil::Date;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

/// Parses a `YYYY-MM-DD` day.
pub fn parse_date(s: &str) -> Result<Date, String> {
    s.trim()
        .parse::<DayKey>()
        .map(Date::from)
        .map_err(|e| e.to_string())
}

/// Parses a `YYYY-MM` month into its first day.
pub fn parse_month(s: &str) -> Result<Date, String> {
    let invalid = || format!("Invalid month '{s}', expected YYYY-MM");
    let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
    if year.len() != 4 || month.len() != 2 {
        return Err(invalid());
    }

    let year: i16 = year.parse().map_err(|_| invalid())?;
    let month: i8 = month.parse().map_err(|_| invalid())?;
    Date::new(year, month, 1).map_err(|_| invalid())
}
