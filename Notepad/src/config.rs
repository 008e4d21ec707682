//! Configuration persistence for Notepad
//!
//! The config lives in `<config dir>/Notepad/config.json`. Loading never fails:
//! a missing or unreadable file yields the defaults.

use std::path::{Path, PathBuf};

use notecore::config::EditorConfig;

use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "Notepad";
const CONFIG_FILE_NAME: &str = "config.json";

/// Get the config file path
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| config_path_in(&p))
}

fn config_path_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Load config from disk, or return default
pub fn load_config() -> EditorConfig {
    config_path()
        .map(|path| load_config_at(&path))
        .unwrap_or_default()
}

pub fn load_config_at(path: &Path) -> EditorConfig {
    match EditorConfig::load_from(path) {
        Ok(config) => config,
        Err(notecore::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            EditorConfig::default()
        }
        Err(e) => {
            tracing::warn!("Ignoring unreadable config {}: {}", path.display(), e);
            EditorConfig::default()
        }
    }
}

/// Save config to disk
pub fn save_config(config: &EditorConfig) -> Result<()> {
    let path = config_path().ok_or(Error::NoConfigDir)?;
    config.save_to(&path)?;
    tracing::debug!("Saved config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_path_in(dir.path());
        assert_eq!(load_config_at(&path), EditorConfig::default());
    }

    #[test]
    fn test_corrupt_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_path_in(dir.path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config_at(&path), EditorConfig::default());
    }

    #[test]
    fn test_written_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_path_in(dir.path());
        let config = EditorConfig {
            font_size: 18,
            ..EditorConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(load_config_at(&path), config);
    }
}
