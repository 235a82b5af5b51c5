use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::settings::{DbPathSource, Settings, resolve_db_path, settings_path};

/// Show the settings file and where the database path comes from.
pub(crate) fn run_config_show(db: Option<PathBuf>) -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "bookload Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let settings = Settings::load_from(&path)?;
    let (db_path, source) = resolve_db_path(db, &settings);
    let source = match source {
        DbPathSource::Flag => "--db flag",
        DbPathSource::Settings => "settings file",
        DbPathSource::Default => "default",
    };
    log::info!(
        "  Database:      {} {}",
        db_path.display().if_supports_color(Stdout, |t| t.cyan()),
        format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
    );

    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    println!("{}", settings_path().display());
    Ok(())
}
