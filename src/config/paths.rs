//! Path management for the money tracker
//!
//! Everything lives in one data directory: the transaction file and an
//! optional settings file. The directory is given on the command line and
//! defaults to the current working directory.

use std::path::{Path, PathBuf};

use crate::error::TrackerError;

/// Name of the settings file inside the data directory
pub const SETTINGS_FILE_NAME: &str = "money-tracker.json";

/// Manages all paths used by the money tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve the data directory
    ///
    /// # Errors
    ///
    /// Returns an error if no directory is given and the current directory
    /// cannot be determined.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self, TrackerError> {
        let base_dir = match data_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| {
                TrackerError::Config(format!("Could not determine current directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create TrackerPaths with a fixed base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE_NAME)
    }

    /// Get the path to the transaction file named `file_name`
    pub fn transactions_file(&self, file_name: &str) -> PathBuf {
        self.base_dir.join(file_name)
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create data directory: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::new(Some(temp_dir.path().to_path_buf())).unwrap();

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(
            paths.settings_file(),
            temp_dir.path().join("money-tracker.json")
        );
        assert_eq!(
            paths.transactions_file("transactions.txt"),
            temp_dir.path().join("transactions.txt")
        );
    }

    #[test]
    fn test_default_is_current_dir() {
        let paths = TrackerPaths::new(None).unwrap();
        assert_eq!(paths.base_dir(), std::env::current_dir().unwrap());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().join("a").join("b"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
