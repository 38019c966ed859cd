//! Investment interest and mortgage calculators with receipt export

pub mod calculators;
pub mod receipt;
pub mod session;

pub use calculators::{
    interest, mortgage, reconcile_rates, InterestInputs, InterestKind, InterestResult, MortgageInputs,
    MortgageResult, Rates,
};
pub use receipt::{ExportFormat, Receipt, ReceiptHeader, ReceiptRow, RowValue};
pub use session::{Calculation, CalculatorChoice};
