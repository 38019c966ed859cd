//! Interest and mortgage formulas
//!
//! Percentages are passed as written by the user (5 means 5%).

use serde::Serialize;

use crate::errors::{BootcampError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InterestKind {
    Simple,
    Compound,
}

impl InterestKind {
    pub fn title(&self) -> &'static str {
        match self {
            InterestKind::Simple => "Simple Interest",
            InterestKind::Compound => "Compound Interest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterestInputs {
    pub deposit: f64,
    pub annual_pct: f64,
    pub years: u32,
}

impl InterestInputs {
    pub fn new(deposit: f64, annual_pct: f64, years: i64) -> Result<Self> {
        if deposit < 0.0 || annual_pct < 0.0 || years < 0 {
            return Err(BootcampError::InvalidInput(
                "all of your answers must be 0 or above".to_string(),
            ));
        }
        let years = u32::try_from(years)
            .map_err(|_| BootcampError::InvalidInput(format!("{} years is too long", years)))?;
        Ok(Self {
            deposit,
            annual_pct,
            years,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterestResult {
    pub interest: f64,
    pub total: f64,
}

pub fn interest(deposit: f64, annual_pct: f64, years: u32, kind: InterestKind) -> InterestResult {
    let rate = annual_pct / 100.0;
    match kind {
        InterestKind::Simple => {
            let interest = deposit * rate * f64::from(years);
            InterestResult {
                interest,
                total: deposit + interest,
            }
        }
        InterestKind::Compound => {
            let total = deposit * (1.0 + rate).powf(f64::from(years));
            InterestResult {
                interest: total - deposit,
                total,
            }
        }
    }
}

/// Monthly and annual rates after filling in whichever was left at zero
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub monthly_pct: f64,
    pub annual_pct: f64,
    /// Both were given; the monthly rate overrode the annual one
    pub overridden: bool,
}

pub fn reconcile_rates(monthly_pct: f64, annual_pct: f64) -> Rates {
    match (monthly_pct != 0.0, annual_pct != 0.0) {
        (false, true) => Rates {
            monthly_pct: annual_pct / 12.0,
            annual_pct,
            overridden: false,
        },
        (true, false) => Rates {
            monthly_pct,
            annual_pct: monthly_pct * 12.0,
            overridden: false,
        },
        (true, true) => Rates {
            monthly_pct,
            annual_pct: monthly_pct * 12.0,
            overridden: true,
        },
        (false, false) => Rates {
            monthly_pct,
            annual_pct,
            overridden: false,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MortgageInputs {
    pub value: f64,
    pub annual_pct: f64,
    pub monthly_pct: f64,
    pub years: u32,
    /// Months on top of the full years, below 12
    pub months: u32,
}

impl MortgageInputs {
    pub fn new(value: f64, annual_pct: f64, monthly_pct: f64, years: i64, months: i64) -> Result<Self> {
        if value < 0.0 || annual_pct < 0.0 || monthly_pct < 0.0 || years < 0 || months < 0 {
            return Err(BootcampError::InvalidInput(
                "all of your answers must be 0 or above".to_string(),
            ));
        }
        if months >= 12 {
            return Err(BootcampError::InvalidInput(
                "additional months should be less than 12".to_string(),
            ));
        }
        let years = u32::try_from(years)
            .map_err(|_| BootcampError::InvalidInput(format!("{} years is too long", years)))?;
        Ok(Self {
            value,
            annual_pct,
            monthly_pct,
            years,
            months: months as u32,
        })
    }

    pub fn total_months(&self) -> u64 {
        u64::from(self.years) * 12 + u64::from(self.months)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MortgageResult {
    pub monthly: f64,
    pub total: f64,
}

/// Annuity repayment: rate * value / (1 - (1 + rate)^-months)
///
/// A zero denominator (zero term or zero rate) gives a zero payment.
pub fn mortgage(inputs: &MortgageInputs) -> MortgageResult {
    let months = inputs.total_months();
    if months == 0 {
        return MortgageResult {
            monthly: 0.0,
            total: 0.0,
        };
    }

    let monthly_pct = if inputs.monthly_pct == 0.0 {
        inputs.annual_pct / 12.0
    } else {
        inputs.monthly_pct
    };
    let rate = monthly_pct / 100.0;
    let n = months as f64;

    let denominator = 1.0 - (1.0 + rate).powf(-n);
    let monthly = if denominator == 0.0 {
        0.0
    } else {
        rate * inputs.value / denominator
    };

    MortgageResult {
        monthly,
        total: monthly * n,
    }
}
