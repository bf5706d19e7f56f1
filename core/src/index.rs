// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use jiff::civil::Date;

use crate::date::DayKey;
use crate::range::expand_range;
use crate::record::ReservationRecord;

/// Reservations grouped by the days they occupy.
///
/// Owns the loaded records. Within a day, records keep the order of the list
/// the index was built from.
#[derive(Debug, Clone, Default)]
pub struct DayIndex {
    records: Vec<ReservationRecord>,
    by_day: HashMap<DayKey, Vec<usize>>,
}

impl DayIndex {
    /// Builds the index from an ordered record list.
    pub fn new(records: Vec<ReservationRecord>) -> Self {
        let mut by_day: HashMap<DayKey, Vec<usize>> = HashMap::new();
        for (i, record) in records.iter().enumerate() {
            for day in expand_range(record.start_date, record.end_date) {
                by_day.entry(day).or_default().push(i);
            }
        }

        tracing::debug!(
            records = records.len(),
            days = by_day.len(),
            "built day index"
        );
        Self { records, by_day }
    }

    /// The records in load order.
    pub fn records(&self) -> &[ReservationRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose range contains `day`.
    pub fn items_on(&self, day: Date) -> Vec<&ReservationRecord> {
        self.by_day
            .get(&DayKey::from(day))
            .map(|ids| ids.iter().filter_map(|&i| self.records.get(i)).collect())
            .unwrap_or_default()
    }

    /// Number of records whose range contains `day`.
    pub fn count_on(&self, day: Date) -> usize {
        self.by_day.get(&DayKey::from(day)).map_or(0, Vec::len)
    }

    /// Number of records with an active status.
    pub fn active_count(&self) -> usize {
        self.records.iter().filter(|r| r.status.is_active()).count()
    }

    /// Total number of (day, record) entries.
    pub fn len_days(&self) -> usize {
        self.by_day.values().map(Vec::len).sum()
    }
}
