// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::ToSpan;
use jiff::civil::Date;

use crate::date::DayKey;

/// Every calendar day in the inclusive range `[start, end]`, in order.
///
/// An inverted range (`end < start`) covers no days. The walk also stops at the
/// last representable date.
pub fn expand_range(start: Date, end: Date) -> Vec<DayKey> {
    if end < start {
        return Vec::new();
    }

    start
        .series(1.day())
        .take_while(|day| *day <= end)
        .map(DayKey::from)
        .collect()
}
