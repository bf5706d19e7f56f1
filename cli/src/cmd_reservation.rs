// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use decorcal_core::{DecorCal, KitId, ReservationId, format_range};
use jiff::civil::Date;

use crate::util::parse_date;

#[derive(Debug, Clone)]
pub struct CmdReserve {
    pub kit_id: KitId,
    pub start: Date,
    pub end: Date,
}

impl CmdReserve {
    pub const NAME: &str = "reserve";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Reserve a kit for an inclusive range of days")
            .arg(arg!(kit_id: <KIT_ID> "The kit to reserve"))
            .arg(arg!(start: <START> "First day, as YYYY-MM-DD").value_parser(parse_date))
            .arg(arg!(end: <END> "Last day, as YYYY-MM-DD").value_parser(parse_date))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match (
            matches.get_one::<String>("kit_id"),
            matches.get_one::<Date>("start"),
            matches.get_one::<Date>("end"),
        ) {
            (Some(kit_id), Some(start), Some(end)) => Self {
                kit_id: KitId::from(kit_id.as_str()),
                start: *start,
                end: *end,
            },
            _ => unreachable!(),
        }
    }

    pub async fn run(self, app: &mut DecorCal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "reserving kit...");
        let res = app.reserve(&self.kit_id, self.start, self.end).await?;

        println!(
            "{} {} {} ({})",
            "Reserved".green(),
            res.kit_theme_id,
            format_range(res.start_date, res.end_date),
            res.reservation_id,
        );
        if res.is_stock_override {
            println!("{} reserved as a stock override", "Warning:".yellow());
        }
        if !res.message.is_empty() {
            println!("{}", res.message);
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdCancel {
    pub kit_id: KitId,
    pub reservation_id: ReservationId,
}

impl CmdCancel {
    pub const NAME: &str = "cancel";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Cancel a reservation")
            .arg(arg!(kit_id: <KIT_ID> "The kit the reservation belongs to"))
            .arg(arg!(reservation_id: <RESERVATION_ID> "The reservation to cancel"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match (
            matches.get_one::<String>("kit_id"),
            matches.get_one::<String>("reservation_id"),
        ) {
            (Some(kit_id), Some(reservation_id)) => Self {
                kit_id: KitId::from(kit_id.as_str()),
                reservation_id: ReservationId::from(reservation_id.as_str()),
            },
            _ => unreachable!(),
        }
    }

    pub async fn run(self, app: &mut DecorCal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "cancelling reservation...");
        let res = app.cancel(&self.kit_id, &self.reservation_id).await?;

        println!("{} {} ({})", "Cancelled".red(), res.reservation_id, res.status);
        if !res.message.is_empty() {
            println!("{}", res.message);
        }
        Ok(())
    }
}
