//! Storage layer: the ledger blob on disk
//!
//! A single JSON file holds the whole ledger. It is read fully into memory
//! on open (with silent defaulting for fields old payloads lack) and written
//! back atomically after every mutation.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::FinanzasPaths;
use crate::error::FinanzasError;
use crate::models::Ledger;

/// Owns the on-disk blob and the in-memory ledger loaded from it
pub struct LedgerStore {
    paths: FinanzasPaths,
    ledger: Ledger,
}

impl LedgerStore {
    /// Open the store: ensure directories, load the blob if present,
    /// backfill defaults
    ///
    /// A missing blob yields the default ledger (first run); a present but
    /// unparseable blob is an error, never silently discarded.
    pub fn open(paths: FinanzasPaths) -> Result<Self, FinanzasError> {
        paths.ensure_directories()?;

        let mut ledger: Ledger = read_json(paths.ledger_file())?.unwrap_or_default();
        ledger.apply_defaults();

        Ok(Self { paths, ledger })
    }

    /// The in-memory ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The in-memory ledger, mutably; call `save` after mutating
    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// Replace the whole ledger (import path); call `save` to persist
    pub fn replace(&mut self, ledger: Ledger) {
        self.ledger = ledger;
    }

    /// Persist the current ledger atomically
    pub fn save(&self) -> Result<(), FinanzasError> {
        write_json_atomic(self.paths.ledger_file(), &self.ledger)
    }

    /// Delete the stored blob and reset the in-memory ledger (destructive)
    pub fn delete(&mut self) -> Result<(), FinanzasError> {
        let path = self.paths.ledger_file();
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| {
                FinanzasError::Storage(format!("Failed to delete {}: {}", path.display(), e))
            })?;
        }
        self.ledger = Ledger::default();
        Ok(())
    }

    /// The paths configuration
    pub fn paths(&self) -> &FinanzasPaths {
        &self.paths
    }
}
