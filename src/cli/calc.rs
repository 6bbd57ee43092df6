//! Financial calculator CLI commands

use clap::Subcommand;

use crate::error::FinanzasResult;
use crate::models::Money;
use crate::services::calc;

/// Calculator subcommands
#[derive(Subcommand)]
pub enum CalcCommands {
    /// Mortgage payment (French amortization)
    Mortgage {
        /// Property price in euros
        price: f64,
        /// Down payment in euros
        down_payment: f64,
        /// Annual interest rate in percent, e.g. 3.1
        rate: f64,
        /// Term in years
        years: u32,
    },

    /// Recommended emergency fund size
    Emergency {
        /// Average monthly expenses in euros
        monthly_expenses: f64,
        /// Months of cover
        #[arg(short, long, default_value = "6")]
        months: u32,
    },

    /// Compound annual growth rate of an investment
    Cagr {
        /// Initial value in euros
        initial: f64,
        /// Final value in euros
        final_value: f64,
        /// Holding period in years
        years: f64,
    },

    /// Compound-interest projection with monthly contributions
    Compound {
        /// Initial capital in euros
        initial: f64,
        /// Monthly contribution in euros
        monthly: f64,
        /// Annual interest rate in percent
        rate: f64,
        /// Horizon in years
        years: u32,
    },
}

fn euros(value: f64) -> Money {
    Money::from_euros_f64(value)
}

/// Handle a calculator command
pub fn handle_calc_command(cmd: CalcCommands) -> FinanzasResult<()> {
    match cmd {
        CalcCommands::Mortgage {
            price,
            down_payment,
            rate,
            years,
        } => {
            let r = calc::mortgage(price, down_payment, rate, years)?;
            println!("Capital prestado:   {}", euros(r.principal));
            println!("Cuota mensual:      {}", euros(r.monthly_payment));
            println!("Total pagado:       {}", euros(r.total_paid));
            println!("Intereses totales:  {}", euros(r.total_interest));
        }

        CalcCommands::Emergency {
            monthly_expenses,
            months,
        } => {
            let recommended = calc::emergency_fund(monthly_expenses, months)?;
            println!(
                "Colchón recomendado ({months} meses): {}",
                euros(recommended)
            );
        }

        CalcCommands::Cagr {
            initial,
            final_value,
            years,
        } => {
            let rate = calc::cagr(initial, final_value, years)?;
            println!("CAGR: {rate:.2}% anual");
        }

        CalcCommands::Compound {
            initial,
            monthly,
            rate,
            years,
        } => {
            let r = calc::compound_interest(initial, monthly, rate, years)?;
            println!("Aportado:           {}", euros(r.invested));
            println!("Intereses:          {}", euros(r.interest));
            println!("Total a {years} años: {}", euros(r.total));
        }
    }

    Ok(())
}
