//! Category and group CLI commands

use std::collections::BTreeMap;

use clap::Subcommand;

use crate::error::{FinanzasError, FinanzasResult};
use crate::storage::LedgerStore;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all groups with their percentages and categories
    List,

    /// Add a category to a group
    Add {
        /// Group key (basicos, ocio, inversion)
        group: String,
        /// Category name
        name: String,
    },

    /// Remove a category from a group by position
    Remove {
        /// Group key
        group: String,
        /// Zero-based position inside the group
        index: usize,
    },

    /// Replace the group percentages; must sum to exactly 100
    #[command(name = "set-percents")]
    SetPercents {
        /// Assignments of the form key=percent, e.g. "basicos=30 ocio=10 inversion=60"
        #[arg(required = true)]
        assignments: Vec<String>,
    },
}

/// Parse one "key=percent" assignment
fn parse_assignment(raw: &str) -> FinanzasResult<(String, u8)> {
    let (key, percent) = raw.split_once('=').ok_or_else(|| {
        FinanzasError::Validation(format!("se esperaba clave=porcentaje, no \"{raw}\""))
    })?;
    let percent: u8 = percent.parse().map_err(|_| {
        FinanzasError::Validation(format!("porcentaje inválido en \"{raw}\""))
    })?;
    Ok((key.to_string(), percent))
}

/// Handle a category command
pub fn handle_category_command(store: &mut LedgerStore, cmd: CategoryCommands) -> FinanzasResult<()> {
    match cmd {
        CategoryCommands::List => {
            for (key, group) in store.ledger().category_groups.iter() {
                println!("{} — {} ({}%)", key, group.name, group.percent);
                for (index, category) in group.categories.iter().enumerate() {
                    println!("  [{index}] {category}");
                }
            }
        }

        CategoryCommands::Add { group, name } => {
            store.ledger_mut().add_category(&group, &name)?;
            store.save()?;
            println!("Categoría \"{name}\" añadida al grupo {group}.");
        }

        CategoryCommands::Remove { group, index } => {
            let removed = store.ledger_mut().remove_category(&group, index)?;
            store.save()?;
            println!("Categoría \"{removed}\" eliminada del grupo {group}.");
        }

        CategoryCommands::SetPercents { assignments } => {
            let percents: BTreeMap<String, u8> = assignments
                .iter()
                .map(|raw| parse_assignment(raw))
                .collect::<FinanzasResult<_>>()?;
            store.ledger_mut().set_percents(&percents)?;
            store.save()?;
            println!("Porcentajes actualizados.");
        }
    }

    Ok(())
}
