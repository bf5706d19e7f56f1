// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgGroup, ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use decorcal_core::{
    CalendarPage, CalendarView, DayIndex, DecorCal, LoadState, ViewMode, format_date,
};
use jiff::civil::Date;
use serde_json::json;

use crate::calendar_render::{MonthGrid, WeekStrip};
use crate::record_formatter::{RecordColumn, RecordFormatter};
use crate::util::{OutputFormat, parse_date, parse_month};

#[derive(Debug, Clone)]
pub struct CmdCalendar {
    pub mode: ViewMode,
    pub month: Option<Date>,
    pub day: Option<Date>,
    pub step: i32,
    pub output_format: OutputFormat,
}

impl CmdCalendar {
    pub const NAME: &str = "calendar";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cal")
            .about("Show the reservation calendar, the default command")
            .arg(
                arg!(--view <VIEW> "Calendar layout")
                    .value_parser(value_parser!(ViewMode))
                    .conflicts_with("week"),
            )
            .arg(arg!(-w --week "Show the week around the selected day"))
            .arg(arg!(-m --month <MONTH> "Month to show, as YYYY-MM").value_parser(parse_month))
            .arg(arg!(-d --day <DAY> "Day to select, as YYYY-MM-DD").value_parser(parse_date))
            .arg(
                arg!(--prev <N> "Go back N months, or N weeks in week view")
                    .value_parser(value_parser!(u16)),
            )
            .arg(
                arg!(--next <N> "Go forward N months, or N weeks in week view")
                    .value_parser(value_parser!(u16)),
            )
            .group(ArgGroup::new("navigate").args(["prev", "next"]))
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let mode = if matches.get_flag("week") {
            ViewMode::Week
        } else {
            matches.get_one("view").copied().unwrap_or_default()
        };

        let prev = matches.get_one::<u16>("prev").copied().map(i32::from);
        let next = matches.get_one::<u16>("next").copied().map(i32::from);
        let step = next.or(prev.map(|n| -n)).unwrap_or(0);

        Self {
            mode,
            month: matches.get_one("month").copied(),
            day: matches.get_one("day").copied(),
            step,
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, app: &mut DecorCal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing calendar...");
        let view = self.view(app.today());
        let page = app.calendar(view).await?;
        if let LoadState::Errored(message) = page.state() {
            return Err(message.clone().into());
        }

        match self.output_format {
            OutputFormat::Table => print_page(&page),
            OutputFormat::Json => println!("{}", page_json(&page)),
        }
        Ok(())
    }

    /// The view this command asks for, relative to `today`.
    pub fn view(&self, today: Date) -> CalendarView {
        let selected = self.day.unwrap_or(today);
        let mut view = CalendarView::new(selected).with_mode(self.mode);
        view.set_reference(self.month.unwrap_or(selected));
        view.step(self.step);
        view
    }
}

impl Default for CmdCalendar {
    fn default() -> Self {
        Self {
            mode: ViewMode::Month,
            month: None,
            day: None,
            step: 0,
            output_format: OutputFormat::Table,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdDay {
    pub day: Date,
    pub output_format: OutputFormat,
}

impl CmdDay {
    pub const NAME: &str = "day";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the reservations active on a day")
            .arg(arg!(day: <DAY> "The day, as YYYY-MM-DD").value_parser(parse_date))
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<Date>("day") {
            Some(day) => Self {
                day: *day,
                output_format: OutputFormat::from(matches),
            },
            _ => unreachable!(),
        }
    }

    pub async fn run(self, app: &mut DecorCal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing reservations of day...");
        let page = app.calendar(CalendarView::new(self.day)).await?;
        if let LoadState::Errored(message) = page.state() {
            return Err(message.clone().into());
        }

        print_day(&page, self.output_format);
        Ok(())
    }
}

fn print_page(page: &CalendarPage) {
    let view = page.view();
    println!("🗓️ {}", view.title().bold());
    match view.mode() {
        ViewMode::Month => {
            let buckets = page.month_grid();
            let grid = MonthGrid {
                buckets: &buckets,
                selected: view.selected(),
            };
            print!("{grid}");
        }
        ViewMode::Week => {
            let cells = page.week_strip();
            let strip = WeekStrip {
                cells: &cells,
                selected: view.selected(),
            };
            print!("{strip}");
        }
    }
    println!();

    if let Some(notice) = empty_notice(page) {
        println!("{}", notice.italic());
        return;
    }

    print_day(page, OutputFormat::Table);
    println!("Active reservations: {}", page.active_count());
}

/// Notice shown instead of the day detail when nothing was loaded at all.
fn empty_notice(page: &CalendarPage) -> Option<&'static str> {
    page.index()
        .is_some_and(DayIndex::is_empty)
        .then_some("No reservations yet, create one with `decorcal reserve`")
}

/// Prints the reservations of the selected day.
fn print_day(page: &CalendarPage, output_format: OutputFormat) {
    let items = page.selected_items();
    if output_format == OutputFormat::Table {
        let day = format_date(page.view().selected());
        println!(" {} {}", "►".green(), day.italic());
        if items.is_empty() {
            println!("No reservations on this day");
            return;
        }
    }

    let formatter = RecordFormatter::new(vec![
        RecordColumn::Kit,
        RecordColumn::Period,
        RecordColumn::Status,
        RecordColumn::ReservationId,
    ])
    .with_output_format(output_format);
    print!("{}", formatter.format(&items));
}

fn page_json(page: &CalendarPage) -> serde_json::Value {
    let view = page.view();
    let (mode, days) = match view.mode() {
        ViewMode::Month => {
            let days: Vec<_> = page
                .month_grid()
                .iter()
                .map(|b| {
                    json!({
                        "day": b.day,
                        "count": b.items.len(),
                        "isCurrentMonth": b.is_current_month,
                    })
                })
                .collect();
            ("month", days)
        }
        ViewMode::Week => {
            let days: Vec<_> = page
                .week_strip()
                .iter()
                .map(|c| json!({ "day": c.day, "count": c.count }))
                .collect();
            ("week", days)
        }
    };

    json!({
        "title": view.title(),
        "mode": mode,
        "selected": view.selected(),
        "days": days,
        "reservations": page.selected_items(),
        "activeCount": page.active_count(),
    })
}
