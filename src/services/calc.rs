//! Standalone financial calculators
//!
//! Pure projection math with no ledger involvement: mortgage payments,
//! emergency-fund sizing, CAGR and compound-interest growth. These work in
//! f64 euros rather than cent-exact `Money` because they model estimates,
//! not bookkeeping.

use crate::error::{FinanzasError, FinanzasResult};

/// Mortgage amortization summary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MortgageResult {
    pub principal: f64,
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
}

/// French-system mortgage payment for a price, down payment, annual rate
/// in percent and term in years
pub fn mortgage(price: f64, down_payment: f64, annual_rate: f64, years: u32) -> FinanzasResult<MortgageResult> {
    if price <= 0.0 {
        return Err(FinanzasError::Validation("el precio debe ser positivo".into()));
    }
    if down_payment < 0.0 || down_payment >= price {
        return Err(FinanzasError::Validation(
            "la entrada debe estar entre 0 y el precio".into(),
        ));
    }
    if annual_rate < 0.0 {
        return Err(FinanzasError::Validation("el interés no puede ser negativo".into()));
    }
    if years == 0 {
        return Err(FinanzasError::Validation("el plazo debe ser al menos un año".into()));
    }

    let principal = price - down_payment;
    let months = f64::from(years * 12);
    let monthly_rate = annual_rate / 100.0 / 12.0;
    let monthly_payment = if monthly_rate == 0.0 {
        principal / months
    } else {
        let growth = (1.0 + monthly_rate).powf(months);
        principal * monthly_rate * growth / (growth - 1.0)
    };
    let total_paid = monthly_payment * months;

    Ok(MortgageResult {
        principal,
        monthly_payment,
        total_paid,
        total_interest: total_paid - principal,
    })
}

/// Recommended emergency fund: monthly expenses times months of cover
pub fn emergency_fund(monthly_expenses: f64, months: u32) -> FinanzasResult<f64> {
    if monthly_expenses <= 0.0 {
        return Err(FinanzasError::Validation(
            "los gastos mensuales deben ser positivos".into(),
        ));
    }
    if months == 0 {
        return Err(FinanzasError::Validation("los meses deben ser al menos 1".into()));
    }
    Ok(monthly_expenses * f64::from(months))
}

/// Compound annual growth rate, in percent
pub fn cagr(initial: f64, final_value: f64, years: f64) -> FinanzasResult<f64> {
    if initial <= 0.0 || final_value <= 0.0 {
        return Err(FinanzasError::Validation("los importes deben ser positivos".into()));
    }
    if years <= 0.0 {
        return Err(FinanzasError::Validation("los años deben ser positivos".into()));
    }
    Ok(((final_value / initial).powf(1.0 / years) - 1.0) * 100.0)
}

/// Compound-interest projection outcome
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompoundResult {
    /// Initial capital plus every monthly contribution
    pub invested: f64,
    pub interest: f64,
    pub total: f64,
}

/// Future value of an initial amount plus monthly contributions compounded
/// monthly at an annual rate in percent
pub fn compound_interest(
    initial: f64,
    monthly_contribution: f64,
    annual_rate: f64,
    years: u32,
) -> FinanzasResult<CompoundResult> {
    if initial < 0.0 || monthly_contribution < 0.0 {
        return Err(FinanzasError::Validation("los importes no pueden ser negativos".into()));
    }
    if annual_rate < 0.0 {
        return Err(FinanzasError::Validation("el interés no puede ser negativo".into()));
    }
    if years == 0 {
        return Err(FinanzasError::Validation("los años deben ser al menos 1".into()));
    }

    let months = years * 12;
    let monthly_rate = annual_rate / 100.0 / 12.0;
    let mut total = initial;
    for _ in 0..months {
        total = total * (1.0 + monthly_rate) + monthly_contribution;
    }
    let invested = initial + monthly_contribution * f64::from(months);

    Ok(CompoundResult {
        invested,
        interest: total - invested,
        total,
    })
}
