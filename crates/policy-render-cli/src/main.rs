//! `ranger-policy-render <json-file>`
//!
//! Prints the access, row filter and data mask policies of a policy export as
//! three grid tables on stdout. Diagnostics go to stderr, filtered by `RUST_LOG`.

mod commands;

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const BIN_NAME: &str = "ranger-policy-render";

#[derive(Parser, Debug)]
#[command(
    name = BIN_NAME,
    about = "Render policies from a JSON export as text tables",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Path to the policy export (JSON)
    #[arg(value_parser = clap::builder::OsStringValueParser::new())]
    json_file: OsString,
}

impl Cli {
    /// Parse a full command line (program name first).
    ///
    /// Exactly one argument is accepted and it is always taken as the path,
    /// even when it looks like `--` or is empty. Returns `None` for any other
    /// argument count.
    fn from_args<I>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = args.into_iter().skip(1);
        let (Some(path), None) = (args.next(), args.next()) else {
            return None;
        };

        // The path follows `--`, so clap never reads it as an option or separator.
        let argv = [OsString::from(BIN_NAME), OsString::from("--"), path];
        match Self::try_parse_from(argv) {
            Ok(cli) => Some(cli),
            Err(err) => {
                tracing::debug!(error = %err, "Rejected command line");
                None
            }
        }
    }

    fn json_file(&self) -> PathBuf {
        PathBuf::from(&self.json_file)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(cli) = Cli::from_args(std::env::args_os()) else {
        usage();
    };

    commands::render::run(&cli.json_file())
}

/// Print the usage line to stdout and exit with status 1.
fn usage() -> ! {
    let program = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| BIN_NAME.to_string());

    println!("Usage: {} <json-file>", program);
    std::process::exit(1);
}
