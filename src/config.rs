//! Config module.
//! Resolves runtime settings from CLI flags; clap folds in the environment
//! and the built-in defaults.
//! `NEON_LAUNCHER_CONFIG` overrides where items.json is read from,
//! `NEON_LAUNCHER_MODE` overrides the backend.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use std::path::PathBuf;
use std::time::Duration;

use crate::loader::{ConfigSource, DEFAULT_CONFIG_PATH};
use crate::render::RenderMode;

pub const CONFIG_ENV: &str = "NEON_LAUNCHER_CONFIG";
pub const MODE_ENV: &str = "NEON_LAUNCHER_MODE";

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub source: ConfigSource,
    pub mode: RenderMode,
    pub output: Option<PathBuf>,
    pub fragment: bool,
    pub timeout: Option<Duration>,
}

impl Settings {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let location = matches
            .get_one::<String>("config")
            .map(String::as_str)
            .unwrap_or(DEFAULT_CONFIG_PATH);
        let mode = match matches.get_one::<String>("mode") {
            Some(name) => name.parse::<RenderMode>().context("Invalid render mode")?,
            None => RenderMode::default(),
        };

        Ok(Self {
            source: ConfigSource::parse(location),
            mode,
            output: matches.get_one::<PathBuf>("output").cloned(),
            fragment: matches.get_flag("fragment"),
            timeout: matches
                .get_one::<u64>("timeout")
                .map(|secs| Duration::from_secs(*secs)),
        })
    }
}

/// CLI definition.
pub fn command() -> Command {
    Command::new("neon-launcher")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders the links in items.json as launcher tiles")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("LOCATION")
                .help("Path or http(s) URL of the items list")
                .env(CONFIG_ENV)
                .default_value(DEFAULT_CONFIG_PATH),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .short('m')
                .value_name("MODE")
                .help("Backend to render with")
                .env(MODE_ENV)
                .default_value("html")
                .value_parser(["html", "pick"]),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Write the HTML here instead of stdout")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("fragment")
                .long("fragment")
                .help("Emit only the #launcher container, not a full page")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECS")
                .help("Give up on a remote config after this many seconds (no limit by default)")
                .value_parser(value_parser!(u64)),
        )
}
