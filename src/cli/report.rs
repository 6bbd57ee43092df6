//! Report CLI commands

use clap::Subcommand;

use crate::error::FinanzasResult;
use crate::models::{Month, Period};
use crate::reports::{
    AllocationReport, EvolutionReport, InvestmentsReport, SpendingReport, SummaryReport,
};
use crate::storage::LedgerStore;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Global summary: patrimony, invested, emergency fund, savings rate
    Summary {
        /// Month for the flow section (YYYY-MM); defaults to the current month
        #[arg(short, long)]
        month: Option<Month>,
    },

    /// Budget allocation versus targets for a month
    Allocation {
        /// Month (YYYY-MM); defaults to the current month
        #[arg(short, long)]
        month: Option<Month>,
    },

    /// Patrimony evolution over the trailing 12 months
    Evolution {
        /// Last month of the window (YYYY-MM); defaults to the current month
        #[arg(short, long)]
        month: Option<Month>,
    },

    /// Spending by category for a month or a year
    Spending {
        /// Month (YYYY-MM); defaults to the current month
        #[arg(short, long)]
        month: Option<Month>,
        /// Whole year instead of a month
        #[arg(short, long, conflicts_with = "month")]
        year: Option<i32>,
    },

    /// Investment portfolio and emergency-fund progress
    Investments,
}

/// Handle a report command
pub fn handle_report_command(store: &LedgerStore, cmd: ReportCommands) -> FinanzasResult<()> {
    let ledger = store.ledger();

    match cmd {
        ReportCommands::Summary { month } => {
            let report = SummaryReport::generate(ledger, month.unwrap_or_else(Month::current));
            print!("{}", report.format_terminal());
        }
        ReportCommands::Allocation { month } => {
            let report = AllocationReport::generate(ledger, month.unwrap_or_else(Month::current));
            print!("{}", report.format_terminal());
        }
        ReportCommands::Evolution { month } => {
            let report = EvolutionReport::generate(ledger, month.unwrap_or_else(Month::current));
            print!("{}", report.format_terminal());
        }
        ReportCommands::Spending { month, year } => {
            let period = match year {
                Some(y) => Period::Year(y),
                None => Period::Month(month.unwrap_or_else(Month::current)),
            };
            let report = SpendingReport::generate(ledger, period);
            print!("{}", report.format_terminal());
        }
        ReportCommands::Investments => {
            let report = InvestmentsReport::generate(ledger);
            print!("{}", report.format_terminal());
        }
    }

    Ok(())
}
