//! Path management for finanzas-cli
//!
//! Provides path resolution for the ledger blob and export directory.
//!
//! ## Path Resolution Order
//!
//! 1. `FINANZAS_DATA_DIR` environment variable (if set)
//! 2. The platform data directory (XDG on Linux, Application Support on
//!    macOS, `%APPDATA%` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinanzasError;

/// Manages all paths used by finanzas-cli
#[derive(Debug, Clone)]
pub struct FinanzasPaths {
    /// Base directory for all finanzas-cli data
    base_dir: PathBuf,
}

impl FinanzasPaths {
    /// Create a new FinanzasPaths instance
    ///
    /// Path resolution:
    /// 1. `FINANZAS_DATA_DIR` env var (explicit override)
    /// 2. Platform data dir via `directories`
    ///
    /// # Errors
    ///
    /// Returns an error if the platform data directory cannot be determined.
    pub fn new() -> Result<Self, FinanzasError> {
        let base_dir = if let Ok(custom) = std::env::var("FINANZAS_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let proj = ProjectDirs::from("", "", "finanzas-cli").ok_or_else(|| {
                FinanzasError::Config("Could not determine platform data directory".into())
            })?;
            proj.data_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create FinanzasPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the persisted ledger blob
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join("ledger.json")
    }

    /// Get the directory backups are exported into
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), FinanzasError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinanzasError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| FinanzasError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }

    /// Check if a ledger has been stored yet
    pub fn is_initialized(&self) -> bool {
        self.ledger_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanzasPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.ledger_file(), temp_dir.path().join("ledger.json"));
        assert_eq!(paths.export_dir(), temp_dir.path().join("exports"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanzasPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.export_dir().exists());
    }

    #[test]
    fn test_is_initialized() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanzasPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.is_initialized());
        std::fs::write(paths.ledger_file(), "{}").unwrap();
        assert!(paths.is_initialized());
    }
}
