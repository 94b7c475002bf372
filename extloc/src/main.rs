//! # extloc
//!
//! A CLI for counting source lines per file extension, separating code
//! from comments.
//!
//! ## Usage
//!
//! ```bash
//! # Count everything under a directory
//! extloc .
//!
//! # Skip vendored code, count only Go and Rust files
//! extloc -i vendor,.git -e go,rs .
//!
//! # Recognize hash and double-slash comments
//! extloc -c "//,#" .
//!
//! # One-line summary
//! extloc -q .
//!
//! # Settings from a JSON file; explicit flags still win
//! extloc --config extloc.json .
//! ```

use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use extloclib::{scan_directory, ScanConfig};

mod config;
mod render;

use config::{OutputFormat, Settings};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("extloc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Per-extension source line counter separating code from comments")
        .arg(Arg::new("path").help("Directory to scan").required(true))
        .arg(
            Arg::new("ignore")
                .short('i')
                .long("ignore")
                .default_value("")
                .hide_default_value(true)
                .help("Comma-separated file or directory names to skip"),
        )
        .arg(
            Arg::new("extensions")
                .short('e')
                .long("extensions")
                .default_value("")
                .hide_default_value(true)
                .help("Comma-separated extensions to include, without the dot"),
        )
        .arg(
            Arg::new("comments")
                .short('c')
                .long("comments")
                .default_value("//")
                .help("Comma-separated comment prefixes (e.g. //,#,--)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Print only the final line counts"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Path to a JSON config file"),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .help("Number of analysis workers (defaults to the CPU count)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
}

fn run() -> anyhow::Result<()> {
    let matches = build_command().get_matches();
    let settings = Settings::resolve(&matches)?;

    let scan_config = ScanConfig::new()
        .ignore_names(settings.ignore.clone())
        .extensions(settings.extensions.clone())
        .comment_tokens(settings.comments.clone());

    let result = scan_directory(&settings.path, &scan_config, settings.jobs)?;

    match settings.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Table if settings.quiet => println!("{}", render::render_quiet(&result)),
        OutputFormat::Table => print!(
            "{}",
            render::render_table(&result, console::colors_enabled())
        ),
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
