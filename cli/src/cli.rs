// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use decorcal_core::{APP_NAME, DecorCal};
use futures::{FutureExt, future::BoxFuture};
use tracing_subscriber::EnvFilter;

use crate::cmd_auth::{CmdLogin, CmdLogout};
use crate::cmd_calendar::{CmdCalendar, CmdDay};
use crate::cmd_dashboard::CmdDashboard;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_kit::{CmdKitList, CmdKitNew};
use crate::cmd_reservation::{CmdCancel, CmdReserve};
use crate::config::parse_config;

/// Run the DecorCal command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Logs go to stderr, filtered by `RUST_LOG` and defaulting to warnings.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Reservation calendar for rental-kit bookings.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to calendar
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config <CONFIG> "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/decorcal/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/decorcal/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdCalendar::command())
            .subcommand(CmdDay::command())
            .subcommand(CmdDashboard::command())
            .subcommand(
                Command::new("kit")
                    .alias("k")
                    .about("Manage kits")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdKitNew::command())
                    .subcommand(CmdKitList::command()),
            )
            .subcommand(CmdKitList::command().name("kits").about("List kits, same as `kit list`"))
            .subcommand(CmdReserve::command())
            .subcommand(CmdCancel::command())
            .subcommand(CmdLogin::command())
            .subcommand(CmdLogout::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdCalendar::NAME, matches)) => Calendar(CmdCalendar::from(matches)),
            Some((CmdDay::NAME, matches)) => Day(CmdDay::from(matches)),
            Some((CmdDashboard::NAME, matches)) => Dashboard(CmdDashboard::from(matches)),
            Some(("kit", matches)) => match matches.subcommand() {
                Some((CmdKitNew::NAME, matches)) => KitNew(CmdKitNew::from(matches)),
                Some((CmdKitList::NAME, matches)) => KitList(CmdKitList::from(matches)),
                _ => unreachable!(),
            },
            Some(("kits", matches)) => KitList(CmdKitList::from(matches)),
            Some((CmdReserve::NAME, matches)) => Reserve(CmdReserve::from(matches)),
            Some((CmdCancel::NAME, matches)) => Cancel(CmdCancel::from(matches)),
            Some((CmdLogin::NAME, matches)) => Login(CmdLogin::from(matches)),
            Some((CmdLogout::NAME, matches)) => Logout(CmdLogout::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Calendar(CmdCalendar::default()),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the calendar
    Calendar(CmdCalendar),

    /// List the reservations of a day
    Day(CmdDay),

    /// Show kit totals and upcoming reservations
    Dashboard(CmdDashboard),

    /// Create a kit
    KitNew(CmdKitNew),

    /// List kits
    KitList(CmdKitList),

    /// Reserve a kit
    Reserve(CmdReserve),

    /// Cancel a reservation
    Cancel(CmdCancel),

    /// Log in
    Login(CmdLogin),

    /// Log out
    Logout(CmdLogout),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Calendar(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            Day(a)      => Self::run_with(config, |x| a.run(x).boxed()).await,
            Dashboard(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            KitNew(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            KitList(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
            Reserve(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
            Cancel(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            Login(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            Logout(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut DecorCal) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let core_config = parse_config(config).await?;
        let mut app = DecorCal::new(core_config).await?;

        f(&mut app).await
    }
}
