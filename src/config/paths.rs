//! Location of `settings.toml`.
//!
//! Resolution order:
//!
//! 1. an explicit path (the CLI `--config` flag),
//! 2. the `POLYGLOT_CONFIG` environment variable,
//! 3. `<platform config dir>/polyglot-assistant/settings.toml`, where the
//!    platform directory comes from `dirs::config_dir` (`~/.config` on Linux,
//!    `~/Library/Application Support` on macOS, `%APPDATA%` on Windows).

use std::path::{Path, PathBuf};

/// Environment variable naming an alternative settings file.
pub const CONFIG_PATH_ENV: &str = "POLYGLOT_CONFIG";

const APP_DIR: &str = "polyglot-assistant";
const SETTINGS_FILE: &str = "settings.toml";

/// A resolved settings file and the directory that holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_dir: PathBuf,
    pub settings_file: PathBuf,
}

impl AppPaths {
    /// The platform default location.
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| {
            log::warn!("config: no platform config directory, using the working directory");
            PathBuf::from(".")
        });
        Self::under(base)
    }

    /// `<base>/polyglot-assistant/settings.toml`.
    pub fn under(base: impl AsRef<Path>) -> Self {
        let config_dir = base.as_ref().join(APP_DIR);
        Self {
            settings_file: config_dir.join(SETTINGS_FILE),
            config_dir,
        }
    }

    /// Paths for a settings file chosen by the user.
    pub fn for_settings_file(path: impl Into<PathBuf>) -> Self {
        let settings_file = path.into();
        let config_dir = settings_file
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        Self {
            config_dir,
            settings_file,
        }
    }

    /// Apply the resolution order, reading [`CONFIG_PATH_ENV`] from the
    /// environment.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        Self::resolve_with(explicit, std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
    }

    fn resolve_with(explicit: Option<PathBuf>, from_env: Option<PathBuf>) -> Self {
        let chosen = explicit.or(from_env.filter(|p| !p.as_os_str().is_empty()));
        match chosen {
            Some(path) => {
                log::debug!("config: using {}", path.display());
                Self::for_settings_file(path)
            }
            None => Self::new(),
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
