use anyhow::Result;
use clap::{Parser, Subcommand};

use finanzas_cli::cli::{
    handle_calc_command, handle_category_command, handle_data_command, handle_report_command,
    handle_transaction_command, CalcCommands, CategoryCommands, DataCommands, ReportCommands,
    TransactionCommands,
};
use finanzas_cli::config::paths::FinanzasPaths;
use finanzas_cli::error::{FinanzasError, FinanzasResult};
use finanzas_cli::models::Money;
use finanzas_cli::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "finanzas",
    version,
    about = "Seguimiento de finanzas personales desde la terminal",
    long_about = "Registra ingresos y gastos, sigue tu patrimonio, tus inversiones \
                  y tu colchón de emergencia, y compara tus gastos con los \
                  porcentajes de presupuesto que te hayas marcado."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category and group management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Backup, restore and reset
    #[command(subcommand)]
    Data(DataCommands),

    /// Standalone financial calculators
    #[command(subcommand)]
    Calc(CalcCommands),

    /// First-run setup: choose the emergency-fund goal
    Setup {
        /// Emergency-fund goal in euros
        emergency_goal: String,
    },

    /// Change the emergency-fund goal
    Goal {
        /// New goal in euros
        amount: String,
    },

    /// Show current configuration and paths
    Config,
}

fn parse_goal(raw: &str) -> FinanzasResult<Money> {
    let goal = Money::parse(raw)
        .map_err(|e| FinanzasError::Validation(format!("objetivo inválido: {e}")))?;
    if !goal.is_positive() {
        return Err(FinanzasError::Validation(
            "el objetivo debe ser mayor que cero".into(),
        ));
    }
    Ok(goal)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Calculators are pure; no store needed
    let command = match cli.command {
        Commands::Calc(cmd) => {
            handle_calc_command(cmd)?;
            return Ok(());
        }
        command => command,
    };

    let paths = FinanzasPaths::new()?;
    let mut store = LedgerStore::open(paths)?;

    match command {
        Commands::Transaction(cmd) => handle_transaction_command(&mut store, cmd)?,
        Commands::Category(cmd) => handle_category_command(&mut store, cmd)?,
        Commands::Report(cmd) => handle_report_command(&store, cmd)?,
        Commands::Data(cmd) => handle_data_command(&mut store, cmd)?,
        Commands::Setup { emergency_goal } => {
            let goal = parse_goal(&emergency_goal)?;
            store.ledger_mut().complete_setup(goal);
            store.save()?;
            println!("Configuración inicial completada. Objetivo del colchón: {goal}.");
        }
        Commands::Goal { amount } => {
            let goal = parse_goal(&amount)?;
            store.ledger_mut().set_emergency_goal(goal);
            store.save()?;
            println!("Objetivo del colchón actualizado: {goal}.");
        }
        Commands::Config => {
            let ledger = store.ledger();
            println!("Archivo de datos: {}", store.paths().ledger_file().display());
            println!("Exportaciones:    {}", store.paths().export_dir().display());
            println!(
                "Configurado:      {}",
                if ledger.setup_complete { "sí" } else { "no" }
            );
            println!("Transacciones:    {}", ledger.transactions.len());
            println!("Objetivo colchón: {}", ledger.emergency_goal);
        }
        Commands::Calc(_) => unreachable!("handled above"),
    }

    Ok(())
}
