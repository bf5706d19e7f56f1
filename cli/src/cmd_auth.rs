// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use decorcal_core::DecorCal;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Clone)]
pub struct CmdLogin {
    pub username: String,
    pub password: Option<String>,
}

// keep the password out of debug logs
impl std::fmt::Debug for CmdLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmdLogin")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

impl CmdLogin {
    pub const NAME: &str = "login";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Log in and store the access token")
            .arg(arg!(username: <USERNAME> "The user to log in as"))
            .arg(arg!(-p --password <PASSWORD> "The password, read from stdin when omitted"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<String>("username") {
            Some(username) => Self {
                username: username.clone(),
                password: matches.get_one::<String>("password").cloned(),
            },
            _ => unreachable!(),
        }
    }

    pub async fn run(self, app: &mut DecorCal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "logging in...");
        let password = match self.password {
            Some(password) => password,
            None => read_password().await?,
        };

        let token = app.login(&self.username, &password).await?;
        println!(
            "{} {} ({}), token expires at {}",
            "Logged in as".green(),
            self.username,
            token.role,
            token.expires_at_utc,
        );
        Ok(())
    }
}

async fn read_password() -> Result<String, Box<dyn Error>> {
    eprint!("Password: ");
    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .map_err(|e| format!("Failed to read password: {e}"))?;

    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        return Err("Password must not be empty".into());
    }
    Ok(password)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdLogout;

impl CmdLogout {
    pub const NAME: &str = "logout";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Forget the stored access token")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdLogout
    }

    pub async fn run(self, app: &mut DecorCal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "logging out...");
        app.logout().await?;
        println!("Logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login() {
        let cmd = Command::new("test").subcommand(CmdLogin::command());
        let matches = cmd
            .try_get_matches_from(["test", "login", "admin", "--password", "secret"])
            .unwrap();
        let sub_matches = matches.subcommand_matches(CmdLogin::NAME).unwrap();
        let parsed = CmdLogin::from(sub_matches);
        assert_eq!(parsed.username, "admin");
        assert_eq!(parsed.password.as_deref(), Some("secret"));
        assert!(!format!("{parsed:?}").contains("secret"));
    }

    #[test]
    fn test_parse_login_without_password() {
        let cmd = Command::new("test").subcommand(CmdLogin::command());
        let matches = cmd.try_get_matches_from(["test", "login", "admin"]).unwrap();
        let sub_matches = matches.subcommand_matches(CmdLogin::NAME).unwrap();
        assert_eq!(CmdLogin::from(sub_matches).password, None);
    }

    #[test]
    fn test_parse_logout() {
        let cmd = Command::new("test").subcommand(CmdLogout::command());
        let matches = cmd.try_get_matches_from(["test", "logout"]).unwrap();
        let _ = CmdLogout::from(&matches);
    }
}
