//! Settings resolution: command-line flags merged with an optional JSON
//! config file.
//!
//! Precedence is strict: a value from the config file applies only when
//! the matching flag was not given explicitly on the command line.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::parser::ValueSource;
use clap::ArgMatches;
use serde::Deserialize;

/// Output format for the scan report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// JSON config file shape.
///
/// String fields hold comma-separated lists, same as the flags; an empty
/// string is treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub ignore_list: Option<String>,
    #[serde(default)]
    pub extensions: Option<String>,
    #[serde(default)]
    pub comments_list: Option<String>,
    #[serde(default)]
    pub quiet: Option<bool>,
}

impl FileConfig {
    /// Load and parse a JSON config file.
    pub fn load(path: &PathBuf) -> anyhow::Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file '{}'", path.display()))?;
        let config: FileConfig = serde_json::from_str(&data)
            .with_context(|| format!("invalid JSON in config file '{}'", path.display()))?;
        Ok(config)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug)]
pub struct Settings {
    pub path: PathBuf,
    pub ignore: Vec<String>,
    pub extensions: Vec<String>,
    pub comments: Vec<String>,
    pub quiet: bool,
    pub output: OutputFormat,
    pub jobs: Option<usize>,
}

impl Settings {
    /// Resolve settings from parsed arguments, merging in the config file
    /// when one was given.
    pub fn resolve(matches: &ArgMatches) -> anyhow::Result<Self> {
        let file = match matches.get_one::<String>("config") {
            Some(path) => FileConfig::load(&PathBuf::from(path))?,
            None => FileConfig::default(),
        };

        let from_cli = |id: &str| matches.value_source(id) == Some(ValueSource::CommandLine);

        let pick = |id: &str, file_value: &Option<String>| -> String {
            let cli_value = matches
                .get_one::<String>(id)
                .cloned()
                .unwrap_or_default();
            match file_value {
                Some(v) if !v.is_empty() && !from_cli(id) => v.clone(),
                _ => cli_value,
            }
        };

        let quiet = if from_cli("quiet") {
            matches.get_flag("quiet")
        } else {
            file.quiet.unwrap_or(false)
        };

        let output = match matches.get_one::<String>("output").map(String::as_str) {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Table,
        };

        Ok(Settings {
            path: PathBuf::from(matches.get_one::<String>("path").expect("path is required")),
            ignore: parse_list(&pick("ignore", &file.ignore_list)),
            extensions: parse_list(&pick("extensions", &file.extensions)),
            comments: parse_list(&pick("comments", &file.comments_list)),
            quiet,
            output,
            jobs: matches.get_one::<usize>("jobs").copied(),
        })
    }
}

/// Split a comma-separated list, trimming whitespace and dropping empty
/// entries.
pub fn parse_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
