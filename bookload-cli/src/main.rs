//! bookload CLI
//!
//! Command-line interface for importing library book records from CSV files
//! into a catalog database.

mod cli_types;
mod commands;
mod error;
mod settings;

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to set up logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let db = cli.db;
    match cli.command {
        Commands::Import {
            files,
            folder,
            dry_run,
        } => commands::import::run_import(db, files, folder, dry_run),
        Commands::List { category, json } => commands::list::run_list(db, category, json),
        Commands::Categories => commands::list::run_categories(db),
        Commands::Stats => commands::stats::run_stats(db),
        Commands::History { limit } => commands::history::run_history(db, limit),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(db),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    }
}

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}

/// Route `log` output to stdout, and optionally to a log file as well.
///
/// Normal runs print bare messages. `--verbose` adds timestamps and levels
/// and enables debug output; `--quiet` keeps only warnings and errors.
/// `RUST_LOG` overrides either.
fn init_logging(quiet: bool, verbose: bool, logfile: Option<&Path>) -> io::Result<()> {
    let level = if quiet {
        log::LevelFilter::Warn
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                buf.timestamp_seconds(),
                record.level(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }

    match logfile {
        Some(path) => {
            let file = File::create(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(TeeWriter { file })));
        }
        None => {
            builder.target(env_logger::Target::Stdout);
        }
    }

    builder
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))
}

/// Writes everything to stdout and an ANSI-stripped copy to a file.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(&strip_ansi_escapes::strip(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}
