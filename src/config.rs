//! Loads gameplay tunables from disk.

use std::{fs, path::Path};
use tracing::warn;
use wildshore_core::Tunables;

const DEFAULT_CONFIG_PATH: &str = "config/game.toml";

/// Load tunables from the default path.
pub fn load() -> Tunables {
    load_from_path(Path::new(DEFAULT_CONFIG_PATH))
}

/// Load tunables from an explicit path, falling back to defaults on
/// errors. A missing or broken config is never fatal.
pub fn load_from_path(path: &Path) -> Tunables {
    match fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<Tunables>(&contents) {
            Ok(tunables) => tunables,
            Err(err) => {
                warn!("Failed to parse {}: {err}. Using defaults", path.display());
                Tunables::default()
            }
        },
        Err(err) => {
            warn!("Failed to read {}: {err}. Using defaults", path.display());
            Tunables::default()
        }
    }
}
