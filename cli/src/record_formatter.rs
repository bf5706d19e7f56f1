// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use decorcal_core::{ReservationRecord, ReservationStatus};

use crate::table::{Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::OutputFormat;

#[derive(Debug)]
pub struct RecordFormatter {
    columns: Vec<RecordColumn>,
    format: OutputFormat,
}

impl RecordFormatter {
    pub fn new(columns: Vec<RecordColumn>) -> Self {
        Self {
            columns,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, records: &'a [&'a ReservationRecord]) -> Display<'a> {
        Display {
            records,
            formatter: self,
        }
    }
}

impl Default for RecordFormatter {
    fn default() -> Self {
        Self::new(vec![
            RecordColumn::Kit,
            RecordColumn::Period,
            RecordColumn::Status,
        ])
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    records: &'a [&'a ReservationRecord],
    formatter: &'a RecordFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            OutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, self.records)
            ),
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), columns, self.records)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordColumn {
    Kit,
    KitId,
    Period,
    ReservationId,
    Status,
}

impl TableColumn<&ReservationRecord> for RecordColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            RecordColumn::Kit => "Kit",
            RecordColumn::KitId => "Kit ID",
            RecordColumn::Period => "Period",
            RecordColumn::ReservationId => "Reservation ID",
            RecordColumn::Status => "Status",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a &ReservationRecord) -> Cow<'a, str> {
        match self {
            RecordColumn::Kit => data.kit_name.as_str().into(),
            RecordColumn::KitId => data.kit_id.as_str().into(),
            RecordColumn::Period => data.range().into(),
            RecordColumn::ReservationId => data.reservation_id.as_str().into(),
            RecordColumn::Status => data.status.label().into(),
        }
    }

    fn get_color(&self, data: &&ReservationRecord) -> Option<Color> {
        match (self, &data.status) {
            (RecordColumn::Status, ReservationStatus::Active) => Some(Color::Green),
            (RecordColumn::Status, ReservationStatus::Cancelled) => Some(Color::Red),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use decorcal_core::{KitId, ReservationId};
    use jiff::civil::date;

    use super::*;

    fn record(status: &str) -> ReservationRecord {
        ReservationRecord {
            kit_id: KitId::from("kit-1"),
            kit_name: "Safari".to_string(),
            start_date: date(2024, 5, 10),
            end_date: date(2024, 5, 12),
            status: status.into(),
            reservation_id: ReservationId::from("res-1"),
        }
    }

    #[test]
    fn test_table_shows_label_and_range() {
        colored::control::set_override(false);
        let active = record("Active");
        let cancelled = record("Cancelled");
        let records = [&active, &cancelled];

        let out = RecordFormatter::default().format(&records).to_string();

        let lines: Vec<_> = out.lines().collect();
        let header: Vec<_> = lines[0].split_whitespace().collect();
        assert_eq!(header, ["Kit", "Period", "Status"]);
        assert!(lines[1].contains("10/05/2024 - 12/05/2024"));
        assert!(lines[1].ends_with("Ativo"));
        assert!(lines[2].ends_with("Cancelado"));
    }

    #[test]
    fn test_json_uses_column_names() {
        let active = record("Active");
        let records = [&active];
        let columns = vec![RecordColumn::ReservationId, RecordColumn::KitId];
        let formatter = RecordFormatter::new(columns).with_output_format(OutputFormat::Json);

        let out = formatter.format(&records).to_string();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "Reservation ID": "res-1", "Kit ID": "kit-1" }])
        );
    }
}
