// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use decorcal_core::DecorCal;

use crate::kit_formatter::KitFormatter;
use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdKitList {
    pub page: u32,
    pub page_size: u32,
    pub output_format: OutputFormat,
}

impl CmdKitList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List kits")
            .arg(
                arg!(--page <PAGE> "Page number, starting at 1")
                    .value_parser(value_parser!(u32).range(1..))
                    .default_value("1"),
            )
            .arg(
                arg!(--"page-size" <SIZE> "Kits per page")
                    .value_parser(value_parser!(u32).range(1..=100))
                    .default_value("20"),
            )
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            page: matches.get_one("page").copied().unwrap_or(1),
            page_size: matches.get_one("page-size").copied().unwrap_or(20),
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, app: &mut DecorCal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing kits...");
        let kits = app.list_kits(self.page, self.page_size).await?;

        let formatter = KitFormatter::new(self.output_format);
        print!("{}", formatter.format(&kits.items));
        if self.output_format == OutputFormat::Table {
            let shown = u64::from(kits.page.saturating_sub(1)) * u64::from(kits.page_size)
                + kits.items.len() as u64;
            if shown < kits.total_count {
                println!(
                    "Displaying {shown}/{} kits, use --page {} for more",
                    kits.total_count,
                    kits.page + 1,
                );
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdKitNew {
    pub name: String,
}

impl CmdKitNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Create a kit")
            .arg(arg!(name: <NAME> "Name of the kit"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<String>("name") {
            Some(name) => Self { name: name.clone() },
            _ => unreachable!(),
        }
    }

    pub async fn run(self, app: &mut DecorCal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "creating kit...");
        let kit = app.create_kit(&self.name).await?;
        println!("{} {} ({})", "Created".green(), kit.name, kit.id);
        Ok(())
    }
}
