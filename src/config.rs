//! Process configuration, read once from the environment.
//! Used by: main, server.

use std::env::{self, VarError};

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 3000;
pub const PORT_VAR: &str = "PORT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = read_var(PORT_VAR)?;
        Self::from_lookup(|_| port.clone())
    }

    /// Builds the config from any key lookup. An unset or blank `PORT` falls
    /// back to [`DEFAULT_PORT`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(PORT_VAR) {
            Some(raw) if !raw.trim().is_empty() => Ok(Self {
                port: parse_port(&raw)?,
            }),
            _ => Ok(Self::default()),
        }
    }
}

/// A value that is set but not valid UTF-8 can never be a port.
fn read_var(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(raw) => Ok(Some(raw)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => {
            Err(Error::InvalidPort(raw.to_string_lossy().into_owned()))
        }
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    match raw.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err(Error::InvalidPort(raw.to_string())),
        Ok(port) => Ok(port),
    }
}
