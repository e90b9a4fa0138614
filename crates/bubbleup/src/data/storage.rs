//! Data directory layout
//!
//! Directory structure:
//! ~/.bubbleup/
//!   keybindings.yaml     # Optional keybinding overrides
//!   bubbleup.log         # Size-rotated log file

use std::fs;
use std::path::{Path, PathBuf};

/// Errors reading or writing configuration files
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Manages the data directory holding configuration and logs
#[derive(Debug, Clone)]
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    /// Create a new DataDirectory instance
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.bubbleup/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bubbleup")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the path to keybindings.yaml
    pub fn keybindings_path(&self) -> PathBuf {
        self.root.join("keybindings.yaml")
    }

    /// Get the path to the log file
    pub fn log_path(&self) -> PathBuf {
        self.root.join("bubbleup.log")
    }

    /// Create the directory if it does not exist yet
    pub fn ensure_exists(&self) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }
}
