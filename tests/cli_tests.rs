//! End-to-end CLI tests
//!
//! Each test runs the binary against its own temporary data directory via
//! the FINANZAS_DATA_DIR override, so tests never touch real data and can
//! run in parallel.

use std::error::Error;
use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finanzas(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finanzas").unwrap();
    cmd.env("FINANZAS_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_transaction_then_summary() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    finanzas(&dir)
        .args(["transaction", "add", "income", "2000", "Salario", "--month", "2024-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("registrada"));

    finanzas(&dir)
        .args(["transaction", "add", "expense", "500", "Colchón", "--month", "2024-06"])
        .assert()
        .success();

    finanzas(&dir)
        .args(["report", "summary", "--month", "2024-06"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Patrimonio")
                .and(predicate::str::contains("2.000,00€"))
                .and(predicate::str::contains("1.500,00€")),
        );

    Ok(())
}

#[test]
fn rejects_non_positive_amount() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    finanzas(&dir)
        .args(["transaction", "add", "expense", "0", "Comida"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("mayor que cero"));

    finanzas(&dir)
        .args(["transaction", "add", "expense", "-5", "Comida"])
        .assert()
        .failure();

    Ok(())
}

#[test]
fn list_filters_by_month() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    finanzas(&dir)
        .args(["transaction", "add", "expense", "10", "Comida", "--month", "2024-05"])
        .assert()
        .success();
    finanzas(&dir)
        .args(["transaction", "add", "expense", "20", "Ocio", "--month", "2024-06"])
        .assert()
        .success();

    finanzas(&dir)
        .args(["transaction", "list", "--month", "2024-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ocio").and(predicate::str::contains("Comida").not()));

    Ok(())
}

#[test]
fn remove_missing_transaction_is_not_an_error() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    finanzas(&dir)
        .args(["transaction", "remove", "12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No existe"));

    Ok(())
}

#[test]
fn category_add_and_duplicate_rejected() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    finanzas(&dir)
        .args(["category", "add", "ocio", "Viajes"])
        .assert()
        .success();

    // Same name, other group: still a duplicate
    finanzas(&dir)
        .args(["category", "add", "basicos", "Viajes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Viajes"));

    finanzas(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Viajes").and(predicate::str::contains("Inversión")));

    Ok(())
}

#[test]
fn set_percents_must_sum_to_hundred() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    finanzas(&dir)
        .args(["category", "set-percents", "basicos=30", "ocio=30", "inversion=30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("100"));

    finanzas(&dir)
        .args(["category", "set-percents", "basicos=30", "ocio=10", "inversion=60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("actualizados"));

    finanzas(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(60%)"));

    Ok(())
}

#[test]
fn allocation_report_flags_overspending() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    finanzas(&dir)
        .args(["transaction", "add", "income", "1000", "Salario", "--month", "2024-06"])
        .assert()
        .success();
    // Salud belongs to the 20% group: target 200, actual 250
    finanzas(&dir)
        .args(["transaction", "add", "expense", "250", "Salud", "--month", "2024-06"])
        .assert()
        .success();

    finanzas(&dir)
        .args(["report", "allocation", "--month", "2024-06"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("200,00€")
                .and(predicate::str::contains("250,00€"))
                .and(predicate::str::contains("+50,00€")),
        );

    Ok(())
}

#[test]
fn export_import_round_trip() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    finanzas(&dir)
        .args(["transaction", "add", "income", "1234,56", "Salario", "--month", "2024-06"])
        .assert()
        .success();

    let backup = dir.path().join("copia.json");
    finanzas(&dir)
        .args(["data", "export", "--output"])
        .arg(&backup)
        .assert()
        .success();

    finanzas(&dir)
        .args(["data", "reset", "--yes"])
        .assert()
        .success();
    finanzas(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sin transacciones"));

    finanzas(&dir)
        .args(["data", "import", "--yes"])
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 transacciones"));

    finanzas(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.234,56€"));

    Ok(())
}

#[test]
fn import_rejects_file_without_transactions() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let bad = dir.path().join("bad.json");
    fs::write(&bad, r#"{"setupComplete": true}"#)?;

    finanzas(&dir)
        .args(["data", "import", "--yes"])
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("transacciones"));

    Ok(())
}

#[test]
fn import_without_confirmation_changes_nothing() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let backup = dir.path().join("copia.json");
    fs::write(&backup, r#"{"transactions": []}"#)?;

    finanzas(&dir)
        .args(["transaction", "add", "income", "100", "Salario", "--month", "2024-06"])
        .assert()
        .success();

    finanzas(&dir)
        .args(["data", "import"])
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));

    finanzas(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salario"));

    Ok(())
}

#[test]
fn setup_and_goal() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    finanzas(&dir)
        .args(["setup", "8000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8.000,00€"));

    finanzas(&dir)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sí").and(predicate::str::contains("8.000,00€")));

    finanzas(&dir)
        .args(["goal", "10000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10.000,00€"));

    Ok(())
}

#[test]
fn calc_mortgage_needs_no_data_dir() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    finanzas(&dir)
        .args(["calc", "mortgage", "250000", "50000", "3", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("843,21€"));

    finanzas(&dir)
        .args(["calc", "emergency", "1200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7.200,00€"));

    Ok(())
}

#[test]
fn old_blob_gains_investment_group_on_load() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("ledger.json"),
        r#"{"transactions": [], "categoryGroups": {"basicos": {"name": "Gastos Básicos", "percent": 100, "categories": ["Salud"]}}}"#,
    )?;

    finanzas(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inversión").and(predicate::str::contains("Colchón")));

    Ok(())
}
