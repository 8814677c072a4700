pub mod cli;
pub mod constants;
pub mod convert;
pub mod engine;
pub mod extract;
pub mod mapping;
pub mod naming;
pub mod prompt;
pub mod rewrite;
pub mod settings;
pub mod util;
pub mod vault;

pub use cli::{Cli, Command};
pub use mapping::RenameMapping;
pub use settings::{DateFormat, LinkFormat, Settings};
pub use vault::Vault;

use std::path::PathBuf;

/// Resolve the vault root: explicit flag, then $IMGLINK_VAULT, then the
/// current directory.
pub fn vault_path(flag: Option<&str>) -> PathBuf {
    if let Some(path) = flag {
        return PathBuf::from(path);
    }
    if let Ok(path) = std::env::var(constants::ENV_VAULT) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    PathBuf::from(".")
}

/// Resolve the settings file: explicit flag, then $IMGLINK_SETTINGS, then
/// `.imglink.json` in the user's home directory.
pub fn settings_path(flag: Option<&str>) -> PathBuf {
    if let Some(path) = flag {
        return PathBuf::from(path);
    }
    if let Ok(path) = std::env::var(constants::ENV_SETTINGS) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    dirs::home_dir()
        .map(|home| home.join(constants::SETTINGS_FILENAME))
        .unwrap_or_else(|| PathBuf::from(constants::SETTINGS_FILENAME))
}
