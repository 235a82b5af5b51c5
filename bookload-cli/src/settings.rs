//! User settings (`~/.config/bookload/settings.toml`) and database path resolution.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::CliError;

/// Canonical path to the settings file: `~/.config/bookload/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("bookload").join("settings.toml")
}

/// Database used when neither `--db` nor the settings file names one.
pub(crate) fn default_db_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from(".data"));
    data.join("bookload").join("catalog.db")
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Settings {
    #[serde(default)]
    pub database: DatabaseSettings,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DatabaseSettings {
    /// Catalog database file.
    pub path: Option<PathBuf>,
}

impl Settings {
    /// Load the user's settings. A missing file means defaults.
    pub(crate) fn load() -> Result<Self, CliError> {
        Self::load_from(&settings_path())
    }

    pub(crate) fn load_from(path: &Path) -> Result<Self, CliError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&contents)
            .map_err(|e| CliError::config(format!("{}: {}", path.display(), e)))
    }
}

/// Where the database path came from, for `config show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DbPathSource {
    Flag,
    Settings,
    Default,
}

/// Resolve the catalog database path using a priority chain:
///
/// 1. `--db` flag (if `Some`)
/// 2. `database.path` in `settings.toml`
/// 3. [`default_db_path`]
pub(crate) fn resolve_db_path(
    cli_override: Option<PathBuf>,
    settings: &Settings,
) -> (PathBuf, DbPathSource) {
    if let Some(p) = cli_override {
        return (p, DbPathSource::Flag);
    }
    if let Some(p) = &settings.database.path {
        return (p.clone(), DbPathSource::Settings);
    }
    (default_db_path(), DbPathSource::Default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_settings_file_is_default() {
        let tmp = tempfile::TempDir::new().unwrap();
        let settings = Settings::load_from(&tmp.path().join("settings.toml")).unwrap();
        assert!(settings.database.path.is_none());
    }

    #[test]
    fn database_path_is_read() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "[database]\npath = \"/srv/library/catalog.db\"\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(
            settings.database.path,
            Some(PathBuf::from("/srv/library/catalog.db"))
        );
    }

    #[test]
    fn malformed_settings_is_a_config_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "[database\npath = 1").unwrap();
        assert!(matches!(Settings::load_from(&path), Err(CliError::Config(_))));
    }

    #[test]
    fn flag_beats_settings_beats_default() {
        let settings = Settings {
            database: DatabaseSettings {
                path: Some(PathBuf::from("from-settings.db")),
            },
        };

        let (path, source) = resolve_db_path(Some(PathBuf::from("flag.db")), &settings);
        assert_eq!((path, source), (PathBuf::from("flag.db"), DbPathSource::Flag));

        let (path, source) = resolve_db_path(None, &settings);
        assert_eq!(
            (path, source),
            (PathBuf::from("from-settings.db"), DbPathSource::Settings)
        );

        let (path, source) = resolve_db_path(None, &Settings::default());
        assert_eq!((path, source), (default_db_path(), DbPathSource::Default));
    }
}
