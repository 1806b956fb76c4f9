use std::env;
use std::path::PathBuf;

use directories_next::ProjectDirs;

pub const ENV_CONFIG_DIR: &str = "ORBITRAP_CONFIG_DIR";
pub const ENV_CONFIG_FILE: &str = "ORBITRAP_CONFIG";
pub const ENV_SHADER_DIR: &str = "ORBITRAP_SHADER_DIR";

pub const CONFIG_FILE_NAME: &str = "config.toml";

const QUALIFIER: &str = "org";
const ORGANISATION: &str = "Orbitrap";
const APPLICATION: &str = "orbitrap";

/// Directory searched for `config.toml` when `--config` is not given.
///
/// `ORBITRAP_CONFIG_DIR` wins over the platform default.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = env_override(ENV_CONFIG_DIR) {
        return Some(dir);
    }
    ProjectDirs::from(QUALIFIER, ORGANISATION, APPLICATION)
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Default config file, if one exists on disk.
pub fn default_config_file() -> Option<PathBuf> {
    let path = config_dir()?.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        tracing::debug!(path = %path.display(), "no default config file");
        None
    }
}

fn env_override(name: &str) -> Option<PathBuf> {
    match env::var_os(name) {
        Some(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}
