//! Transaction CLI commands

use clap::{Subcommand, ValueEnum};

use crate::error::{FinanzasError, FinanzasResult};
use crate::models::{Money, Month, TransactionEdit, TransactionKind, DEFAULT_ACCOUNT};
use crate::storage::LedgerStore;

/// Transaction kind as accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// Income (ingreso)
    Income,
    /// Expense (gasto)
    Expense,
}

impl From<KindArg> for TransactionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => TransactionKind::Income,
            KindArg::Expense => TransactionKind::Expense,
        }
    }
}

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// income or expense
        #[arg(value_enum)]
        kind: KindArg,
        /// Amount in euros, e.g. "850" or "12,50"
        amount: String,
        /// Category name
        category: String,
        /// Month (YYYY-MM); defaults to the current month
        #[arg(short, long)]
        month: Option<Month>,
        /// Account name
        #[arg(short, long, default_value = DEFAULT_ACCOUNT)]
        account: String,
        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Edit an existing transaction
    Edit {
        /// Transaction id
        id: i64,
        /// New amount in euros
        #[arg(long)]
        amount: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<String>,
        /// New account
        #[arg(long)]
        account: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Remove a transaction
    Remove {
        /// Transaction id
        id: i64,
    },

    /// List transactions, newest first
    List {
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<Month>,
        /// Only this year
        #[arg(short, long, conflicts_with = "month")]
        year: Option<i32>,
        /// Maximum number of rows
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Amounts come in as free text; they must parse and be positive
fn parse_positive_amount(raw: &str) -> FinanzasResult<Money> {
    let amount = Money::parse(raw)
        .map_err(|e| FinanzasError::Validation(format!("importe inválido: {e}")))?;
    if !amount.is_positive() {
        return Err(FinanzasError::Validation(
            "el importe debe ser mayor que cero".into(),
        ));
    }
    Ok(amount)
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &mut LedgerStore,
    cmd: TransactionCommands,
) -> FinanzasResult<()> {
    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            month,
            account,
            description,
        } => {
            let amount = parse_positive_amount(&amount)?;
            let month = month.unwrap_or_else(Month::current);
            let id = store.ledger_mut().add_transaction(
                kind.into(),
                month,
                amount,
                category,
                account,
                description,
            );
            store.save()?;
            println!("Transacción {id} registrada ({month}, {amount}).");
        }

        TransactionCommands::Edit {
            id,
            amount,
            category,
            account,
            description,
        } => {
            let amount = amount.as_deref().map(parse_positive_amount).transpose()?;
            let edit = TransactionEdit {
                amount,
                category,
                account,
                description,
            };
            if edit.is_empty() {
                println!("Nada que cambiar.");
                return Ok(());
            }
            if store.ledger_mut().edit_transaction(id, edit) {
                store.save()?;
                println!("Transacción {id} actualizada.");
            } else {
                println!("No existe la transacción {id}.");
            }
        }

        TransactionCommands::Remove { id } => {
            if store.ledger_mut().remove_transaction(id) {
                store.save()?;
                println!("Transacción {id} eliminada.");
            } else {
                println!("No existe la transacción {id}.");
            }
        }

        TransactionCommands::List { month, year, limit } => {
            let mut rows: Vec<_> = store
                .ledger()
                .transactions
                .iter()
                .filter(|t| match (month, year) {
                    (Some(m), _) => t.month == m,
                    (None, Some(y)) => t.month.in_year(y),
                    (None, None) => true,
                })
                .collect();
            rows.sort_by(|a, b| b.month.cmp(&a.month).then(b.id.cmp(&a.id)));
            rows.truncate(limit);

            if rows.is_empty() {
                println!("Sin transacciones.");
                return Ok(());
            }
            for txn in rows {
                let description = if txn.description.is_empty() {
                    String::new()
                } else {
                    format!("  ({})", txn.description)
                };
                println!("{:>15}  {}{}", txn.id, txn, description);
            }
        }
    }

    Ok(())
}
