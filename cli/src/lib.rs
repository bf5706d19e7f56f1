// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end for the DecorCal reservation calendar.

mod calendar_render;
mod cli;
mod cmd_auth;
mod cmd_calendar;
mod cmd_dashboard;
mod cmd_generate_completion;
mod cmd_kit;
mod cmd_reservation;
mod config;
mod kit_formatter;
mod record_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
