// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use decorcal_core::{Dashboard, DecorCal};
use serde_json::json;

use crate::record_formatter::{RecordColumn, RecordFormatter};
use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdDashboard {
    pub output_format: OutputFormat,
}

impl CmdDashboard {
    pub const NAME: &str = "dashboard";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("dash")
            .about("Show kit totals and the next active reservations")
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, app: &mut DecorCal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating dashboard...");
        let dashboard = app.dashboard().await?;
        match self.output_format {
            OutputFormat::Table => print!("{}", render(&dashboard)),
            OutputFormat::Json => println!("{}", dashboard_json(&dashboard)),
        }
        Ok(())
    }
}

fn render(dashboard: &Dashboard) -> String {
    let mut out = format!(
        "Kits: {}\nActive reservations: {}\nStatus: {}\n\n",
        dashboard.kit_count,
        dashboard.active_count(),
        dashboard.occupancy_label(),
    );

    out.push_str(&format!(" {} {}\n", "►".green(), "Upcoming".italic()));
    if dashboard.upcoming.is_empty() {
        out.push_str("No active reservations\n");
        return out;
    }

    let columns = vec![RecordColumn::Kit, RecordColumn::Period, RecordColumn::Status];
    let records: Vec<_> = dashboard.upcoming.iter().collect();
    out.push_str(&RecordFormatter::new(columns).format(&records).to_string());
    out
}

fn dashboard_json(dashboard: &Dashboard) -> serde_json::Value {
    json!({
        "kitCount": dashboard.kit_count,
        "activeCount": dashboard.active_count(),
        "occupancy": dashboard.occupancy_label(),
        "upcoming": dashboard.upcoming,
    })
}
