// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// Rows of `T` rendered through a list of columns.
pub struct Table<'a, S, C, T> {
    style: S,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, S, C, T> Table<'a, S, C, T> {
    pub fn new(style: S, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }
}

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Space separated, padded columns with a bold header.
#[derive(Debug, Clone, Copy)]
pub struct TableStyleBasic {
    header: bool,
}

impl TableStyleBasic {
    pub fn new() -> Self {
        Self { header: true }
    }

    pub fn without_header(mut self) -> Self {
        self.header = false;
        self
    }
}

/// A JSON array with one object per row, keyed by column name.
#[derive(Debug, Clone, Copy)]
pub struct TableStyleJson;

impl TableStyleJson {
    pub fn new() -> Self {
        Self
    }
}

impl<S, C, T> fmt::Display for Table<'_, S, C, T>
where
    S: TableStyle,
    C: TableColumn<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.style.write(f, self.columns, self.data)
    }
}

pub trait TableStyle {
    fn write<C: TableColumn<T>, T>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result;
}

impl TableStyle for TableStyleBasic {
    fn write<C: TableColumn<T>, T>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        const SEPARATOR: &str = "  ";

        let header: Vec<Cow<'_, str>> = columns.iter().map(|c| c.name()).collect();
        let rows: Vec<Vec<Cow<'_, str>>> = data
            .iter()
            .map(|row| columns.iter().map(|c| c.format(row)).collect())
            .collect();

        let mut widths: Vec<usize> = if self.header {
            header.iter().map(|h| h.width()).collect()
        } else {
            vec![0; columns.len()]
        };
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.width());
            }
        }

        if self.header {
            for (i, name) in header.iter().enumerate() {
                let cell = pad(name, widths[i], PaddingDirection::Left, i + 1 == columns.len());
                write!(f, "{}", cell.bold())?;
                write!(f, "{}", if i + 1 < columns.len() { SEPARATOR } else { "\n" })?;
            }
        }

        for (row, cells) in data.iter().zip(rows) {
            for (i, (col, cell)) in columns.iter().zip(cells).enumerate() {
                let last = i + 1 == columns.len();
                let cell = pad(&cell, widths[i], col.padding_direction(), last);
                match col.get_color(row) {
                    Some(color) => write!(f, "{}", cell.color(color))?,
                    None => write!(f, "{cell}")?,
                }
                write!(f, "{}", if last { "\n" } else { SEPARATOR })?;
            }
        }
        Ok(())
    }
}

impl TableStyle for TableStyleJson {
    fn write<C: TableColumn<T>, T>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let rows: Vec<serde_json::Map<String, serde_json::Value>> = data
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|c| (c.name().into_owned(), c.format(row).into_owned().into()))
                    .collect()
            })
            .collect();

        let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
        writeln!(f, "{json}")
    }
}

fn pad(cell: &str, width: usize, direction: PaddingDirection, last: bool) -> String {
    let fill = width.saturating_sub(cell.width());
    match direction {
        // trailing spaces are noise on the last column
        PaddingDirection::Left if last => cell.to_string(),
        PaddingDirection::Left => format!("{cell}{}", " ".repeat(fill)),
        PaddingDirection::Right => format!("{}{cell}", " ".repeat(fill)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl TableColumn<(&'static str, u32)> for Upper {
        fn name(&self) -> Cow<'_, str> {
            "Name".into()
        }

        fn format<'a>(&self, data: &'a (&'static str, u32)) -> Cow<'a, str> {
            data.0.to_uppercase().into()
        }
    }

    #[test]
    fn test_basic_pads_to_widest_cell() {
        colored::control::set_override(false);
        let data = [("ação", 1), ("b", 2)];
        let columns = [Upper, Upper];
        let out = Table::new(TableStyleBasic::new(), &columns, &data).to_string();

        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines, ["Name  Name", "AÇÃO  AÇÃO", "B     B"]);
    }

    #[test]
    fn test_json_keys_by_column_name() {
        let data = [("a", 1)];
        let columns = [Upper];
        let out = Table::new(TableStyleJson::new(), &columns, &data).to_string();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, serde_json::json!([{ "Name": "A" }]));
    }

    #[test]
    fn test_basic_without_header_or_rows_is_empty() {
        colored::control::set_override(false);
        let data: [(&str, u32); 0] = [];
        let columns = [Upper];
        let out = Table::new(TableStyleBasic::new().without_header(), &columns, &data).to_string();
        assert!(out.is_empty());
    }
}
