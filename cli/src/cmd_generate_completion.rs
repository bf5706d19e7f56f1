// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use clap_complete::{Shell, generate};
use decorcal_core::APP_NAME;

use crate::Cli;

/// Completion script for the whole `decorcal` command tree.
#[derive(Debug, Clone)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
    pub output: Option<PathBuf>,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate the shell completion script")
            .hide(true)
            .arg(arg!(shell: <SHELL> "Target shell").value_parser(value_parser!(Shell)))
            .arg(
                arg!(-o --output <FILE> "Write the script to FILE instead of stdout")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<Shell>("shell") {
            Some(shell) => Self {
                shell: *shell,
                output: matches.get_one("output").cloned(),
            },
            _ => unreachable!(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        match &self.output {
            Some(path) => {
                let mut file = File::create(path)
                    .map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
                self.write_to(&mut file)?;
                println!("Completion for {} written to {}", self.shell, path.display());
            }
            None => self.write_to(&mut io::stdout())?,
        }
        Ok(())
    }

    /// Writes the script for the `decorcal` binary, whatever name it runs under.
    pub fn write_to(&self, buf: &mut dyn Write) -> io::Result<()> {
        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, APP_NAME, buf);
        buf.flush()
    }
}
