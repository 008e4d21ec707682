//! Editor configuration
//!
//! Serialized as JSON. Every field has a serde default so configs written by
//! older versions (or edited by hand) still load.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::insert::{DEFAULT_NAME, DEFAULT_SIGNATURE};
use crate::view::FALLBACK_FONT_SIZE;

/// Maximum number of recent files to track
pub const MAX_RECENT_FILES: usize = 10;

// Default value functions for serde
fn default_font_size() -> u32 {
    FALLBACK_FONT_SIZE
}
fn default_name() -> String {
    DEFAULT_NAME.to_string()
}
fn default_signature() -> String {
    DEFAULT_SIGNATURE.to_string()
}
fn default_window_width() -> f64 {
    650.0
}
fn default_window_height() -> f64 {
    450.0
}

/// Window geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: f64,
    #[serde(default = "default_window_height")]
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

/// Persistable editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    /// Text used by Insert Name
    #[serde(default = "default_name")]
    pub insert_name: String,
    /// Text used by Insert Signature
    #[serde(default = "default_signature")]
    pub signature: String,
    /// Most recent first
    #[serde(default)]
    pub recent_files: Vec<PathBuf>,
    #[serde(default)]
    pub window: WindowConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            insert_name: default_name(),
            signature: default_signature(),
            recent_files: Vec::new(),
            window: WindowConfig::default(),
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Write the config, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Move `path` to the front of the recent files list.
    pub fn add_recent_file(&mut self, path: &Path) {
        self.recent_files.retain(|p| p != path);
        self.recent_files.insert(0, path.to_path_buf());
        self.recent_files.truncate(MAX_RECENT_FILES);
    }

    pub fn clear_recent_files(&mut self) {
        self.recent_files.clear();
    }
}
