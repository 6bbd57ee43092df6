//! Backup export and import
//!
//! The backup file *is* the ledger blob: the same JSON the store keeps on
//! disk, so a backup can be restored by import or dropped straight into
//! the data directory. Import validates before it replaces anything; a
//! rejected file leaves the current ledger untouched.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde_json::Value;

use crate::error::{FinanzasError, FinanzasResult};
use crate::models::Ledger;
use crate::storage::file_io;

/// Default backup filename for today: `finanzas_backup_YYYY-MM-DD.json`
pub fn default_backup_name() -> String {
    format!("finanzas_backup_{}.json", Local::now().format("%Y-%m-%d"))
}

/// Write the ledger as a backup file, returning the path written
///
/// `destination` may be a directory (the default name is appended) or a
/// full file path.
pub fn export_ledger(ledger: &Ledger, destination: &Path) -> FinanzasResult<PathBuf> {
    let path = if destination.is_dir() {
        destination.join(default_backup_name())
    } else {
        destination.to_path_buf()
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    file_io::write_json_atomic(&path, ledger)?;
    Ok(path)
}

/// Parse a backup file into a ledger, without touching any stored state
///
/// The file must be a JSON object carrying a `transactions` key; anything
/// else is rejected before deserialization so a half-valid file cannot
/// partially load. Missing optional fields are backfilled with defaults,
/// which also accepts backups from older versions of the blob.
pub fn import_ledger(path: &Path) -> FinanzasResult<Ledger> {
    let contents = fs::read_to_string(path).map_err(|e| {
        FinanzasError::Export(format!("no se pudo leer {}: {}", path.display(), e))
    })?;

    let value: Value = serde_json::from_str(&contents)
        .map_err(|e| FinanzasError::InvalidFormat(format!("JSON inválido: {e}")))?;

    let object = value
        .as_object()
        .ok_or_else(|| FinanzasError::InvalidFormat("el archivo no es un objeto JSON".into()))?;
    if !object.contains_key("transactions") {
        return Err(FinanzasError::InvalidFormat(
            "el archivo no contiene transacciones".into(),
        ));
    }

    let mut ledger: Ledger = serde_json::from_value(value)
        .map_err(|e| FinanzasError::InvalidFormat(format!("estructura no reconocida: {e}")))?;
    ledger.apply_defaults();
    Ok(ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Month, TransactionKind, INVESTMENT_GROUP_KEY};
    use tempfile::TempDir;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::default();
        ledger.add_transaction(
            TransactionKind::Income,
            "2024-06".parse::<Month>().unwrap(),
            Money::from_euros(2000),
            "Salario",
            "Efectivo",
            "nómina",
        );
        ledger
    }

    #[test]
    fn test_export_then_import_round_trip() {
        let temp = TempDir::new().unwrap();
        let ledger = sample_ledger();

        let path = export_ledger(&ledger, temp.path()).unwrap();
        assert!(path
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("finanzas_backup_"));

        let restored = import_ledger(&path).unwrap();
        assert_eq!(restored, ledger);
    }

    #[test]
    fn test_export_to_explicit_file_path() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("backups").join("mi_copia.json");
        let path = export_ledger(&sample_ledger(), &target).unwrap();
        assert_eq!(path, target);
        assert!(target.exists());
    }

    #[test]
    fn test_import_rejects_missing_transactions_key() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, r#"{"setupComplete": true, "emergencyGoal": 5000}"#).unwrap();

        let err = import_ledger(&path).unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_import_rejects_non_object() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(import_ledger(&path).unwrap_err().is_invalid_format());
    }

    #[test]
    fn test_import_backfills_old_blob() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("old.json");
        fs::write(&path, r#"{"transactions": []}"#).unwrap();

        let ledger = import_ledger(&path).unwrap();
        assert_eq!(ledger.emergency_goal, Money::from_euros(5000));
        assert!(ledger.category_groups.contains_group(INVESTMENT_GROUP_KEY));
    }
}
