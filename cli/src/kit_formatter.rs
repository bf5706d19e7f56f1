// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use decorcal_core::KitSummary;

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::OutputFormat;

#[derive(Debug)]
pub struct KitFormatter {
    format: OutputFormat,
}

impl KitFormatter {
    const COLUMNS: [KitColumn; 2] = [KitColumn::Id, KitColumn::Name];

    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format<'a>(&'a self, kits: &'a [KitSummary]) -> Display<'a> {
        Display {
            kits,
            format: self.format,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    kits: &'a [KitSummary],
    format: OutputFormat,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &KitFormatter::COLUMNS;
        match self.format {
            OutputFormat::Json => {
                let table = Table::new(TableStyleJson::new(), columns, self.kits);
                write!(f, "{table}")
            }
            OutputFormat::Table => {
                let table = Table::new(TableStyleBasic::new(), columns, self.kits);
                write!(f, "{table}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum KitColumn {
    Id,
    Name,
}

impl TableColumn<KitSummary> for KitColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            KitColumn::Id => "ID",
            KitColumn::Name => "Name",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a KitSummary) -> Cow<'a, str> {
        match self {
            KitColumn::Id => data.id.as_str().into(),
            KitColumn::Name => data.name.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            KitColumn::Id => PaddingDirection::Right,
            KitColumn::Name => PaddingDirection::Left,
        }
    }
}
