// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Text rendering of the month grid and week strip.

use std::fmt::{self, Write};

use colored::Colorize;
use decorcal_core::{DayBucket, WEEK_CELLS, WEEKDAY_LABELS, WeekCell};
use jiff::civil::Date;

const CELL_WIDTH: usize = 6;

/// Six rows of seven cells under a weekday header.
///
/// Each cell shows the day of month and, when busy, the number of
/// reservations active that day.
pub struct MonthGrid<'a> {
    pub buckets: &'a [DayBucket<'a>],
    pub selected: Date,
}

impl fmt::Display for MonthGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f)?;
        for week in self.buckets.chunks(WEEK_CELLS) {
            for (i, bucket) in week.iter().enumerate() {
                let cell = cell_text(bucket.day_of_month, bucket.items.len());
                let cell = if bucket.day.date() == self.selected {
                    cell.reversed()
                } else if !bucket.is_current_month {
                    cell.dimmed()
                } else if !bucket.items.is_empty() {
                    cell.yellow()
                } else {
                    cell.normal()
                };
                write!(f, "{cell}")?;
                if i + 1 < week.len() {
                    f.write_char(' ')?;
                }
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// One line per day of the selected week.
pub struct WeekStrip<'a> {
    pub cells: &'a [WeekCell],
    pub selected: Date,
}

impl fmt::Display for WeekStrip<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, cell) in WEEKDAY_LABELS.iter().zip(self.cells) {
            let line = format!(
                "{label} {}  {}",
                cell.day.date().strftime("%d/%m"),
                count_text(cell.count),
            );
            if cell.day.date() == self.selected {
                writeln!(f, "{}", line.reversed())?;
            } else if cell.count > 0 {
                writeln!(f, "{}", line.yellow())?;
            } else {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

fn write_header(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let header = WEEKDAY_LABELS
        .iter()
        .map(|label| format!("{label:<width$}", width = CELL_WIDTH))
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(f, "{}", header.trim_end().bold())
}

fn cell_text(day_of_month: i8, count: usize) -> String {
    let badge = match count {
        0 => String::new(),
        n => format!("+{n}"),
    };
    format!("{day_of_month:>2} {badge:<width$}", width = CELL_WIDTH - 3)
}

fn count_text(count: usize) -> String {
    match count {
        0 => "-".to_string(),
        1 => "1 reservation".to_string(),
        n => format!("{n} reservations"),
    }
}

#[cfg(test)]
mod tests {
    use decorcal_core::{DayIndex, month_grid, week_strip};
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_month_grid_layout() {
        colored::control::set_override(false);
        let index = DayIndex::new(vec![]);
        let buckets = month_grid(date(2024, 5, 1), &index);

        let out = MonthGrid {
            buckets: &buckets,
            selected: date(2024, 5, 10),
        }
        .to_string();

        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("Seg"));
        assert!(lines[0].ends_with("Dom"));
        // 2024-05-01 is a Wednesday, so the grid opens on Monday 2024-04-29
        assert!(lines[1].starts_with("29"));
        let first_week: Vec<_> = lines[1].split_whitespace().collect();
        assert_eq!(first_week, ["29", "30", "1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_cell_text_badge() {
        assert_eq!(cell_text(7, 0), " 7    ");
        assert_eq!(cell_text(10, 3), "10 +3 ");
        assert_eq!(cell_text(10, 12).len(), CELL_WIDTH);
    }

    #[test]
    fn test_week_strip_lines() {
        colored::control::set_override(false);
        let index = DayIndex::new(vec![]);
        let cells = week_strip(date(2024, 5, 12), &index);

        let out = WeekStrip {
            cells: &cells,
            selected: date(2024, 5, 12),
        }
        .to_string();

        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Seg 06/05  -");
        assert_eq!(lines[6], "Dom 12/05  -");
    }
}
