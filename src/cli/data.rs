//! Data management CLI commands: backup, restore, reset

use std::path::PathBuf;

use clap::Subcommand;

use crate::error::FinanzasResult;
use crate::export::{export_ledger, import_ledger};
use crate::storage::LedgerStore;

/// Data subcommands
#[derive(Subcommand)]
pub enum DataCommands {
    /// Write a backup of all data to a JSON file
    Export {
        /// Destination file or directory; defaults to the exports directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace all data with the contents of a backup file
    Import {
        /// Backup file to restore
        file: PathBuf,
        /// Skip the confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete all data and start over
    Reset {
        /// Skip the confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a data command
pub fn handle_data_command(store: &mut LedgerStore, cmd: DataCommands) -> FinanzasResult<()> {
    match cmd {
        DataCommands::Export { output } => {
            let destination = output.unwrap_or_else(|| store.paths().export_dir());
            let path = export_ledger(store.ledger(), &destination)?;
            println!("Copia de seguridad escrita en {}.", path.display());
        }

        DataCommands::Import { file, yes } => {
            if !yes {
                println!(
                    "Esto reemplazará todos los datos actuales. Repite con --yes para confirmar."
                );
                return Ok(());
            }
            // Parse and validate first; the current ledger survives a bad file
            let ledger = import_ledger(&file)?;
            let count = ledger.transactions.len();
            store.replace(ledger);
            store.save()?;
            println!("Datos restaurados: {count} transacciones.");
        }

        DataCommands::Reset { yes } => {
            if !yes {
                println!("Esto borrará todos los datos. Repite con --yes para confirmar.");
                return Ok(());
            }
            store.delete()?;
            println!("Datos eliminados.");
        }
    }

    Ok(())
}
