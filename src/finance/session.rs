//! Finnegan Finance: the interactive calculator flow
//!
//! Header bar, choice of calculator, validated inputs, a paced
//! "calculation", the results table and an optional receipt export.

use chrono::Local;
use colored::Color;
use tracing::{info, warn};

use super::calculators::{
    interest, mortgage, reconcile_rates, InterestInputs, InterestKind, InterestResult, MortgageInputs,
    MortgageResult,
};
use super::receipt::{ExportFormat, Receipt, ReceiptHeader, ReceiptRow, RowValue, CAPTION};
use crate::cli::Config;
use crate::console::display::{center, rule, two_columns, wrap};
use crate::console::Terminal;
use crate::errors::{BootcampError, Result};
use crate::viewer;

pub const BRAND: &str = "Finnegan Finance";
pub const HEADING: &str = "Investment Interest and Mortgage Calculators";
pub const TIMESTAMP_FORMAT: &str = "%a %b %d, %Y, %I:%M%p";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorChoice {
    Interest,
    Mortgage,
}

impl CalculatorChoice {
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_lowercase().as_str() {
            "i" | "investment" | "interest" => Some(CalculatorChoice::Interest),
            "m" | "mortgage" | "b" | "bond" => Some(CalculatorChoice::Mortgage),
            _ => None,
        }
    }
}

/// A finished calculation with the inputs that produced it
#[derive(Debug, Clone, PartialEq)]
pub enum Calculation {
    Interest {
        kind: InterestKind,
        inputs: InterestInputs,
        result: InterestResult,
    },
    Mortgage {
        inputs: MortgageInputs,
        result: MortgageResult,
    },
}

impl Calculation {
    pub fn title(&self) -> &'static str {
        match self {
            Calculation::Interest { kind: InterestKind::Simple, .. } => "Simple Interest Results",
            Calculation::Interest { kind: InterestKind::Compound, .. } => "Compound Interest Results",
            Calculation::Mortgage { .. } => "Mortgage Payment Results",
        }
    }

    pub fn receipt(&self, header: ReceiptHeader, currency: &str) -> Receipt {
        let (inputs, results) = match self {
            Calculation::Interest { inputs, result, .. } => (
                vec![
                    ReceiptRow::new("Deposit", RowValue::Money(inputs.deposit)),
                    ReceiptRow::new("Annual Interest", RowValue::Percent(inputs.annual_pct)),
                    ReceiptRow::new("Investment Duration (years)", RowValue::Count(u64::from(inputs.years))),
                ],
                vec![
                    ReceiptRow::new("Accrued Interest", RowValue::Money(result.interest)),
                    ReceiptRow::new("Total incl. Deposit and Interest", RowValue::Money(result.total)),
                ],
            ),
            Calculation::Mortgage { inputs, result } => (
                vec![
                    ReceiptRow::new("Dwelling Value", RowValue::Money(inputs.value)),
                    ReceiptRow::new("Annual Interest", RowValue::Percent(inputs.annual_pct)),
                    ReceiptRow::new("Monthly Interest", RowValue::Percent(inputs.monthly_pct)),
                    ReceiptRow::new("Repayment Duration (years)", RowValue::Count(u64::from(inputs.years))),
                    ReceiptRow::new(
                        "Repayment Duration (additional months)",
                        RowValue::Count(u64::from(inputs.months)),
                    ),
                ],
                vec![
                    ReceiptRow::new("Monthly Repayment", RowValue::Money(result.monthly)),
                    ReceiptRow::new("Total Repayment", RowValue::Money(result.total)),
                ],
            ),
        };

        Receipt {
            header,
            title: self.title().to_string(),
            currency: currency.to_string(),
            inputs,
            results,
            caption: CAPTION.to_string(),
        }
    }
}

pub fn current_header() -> ReceiptHeader {
    ReceiptHeader {
        brand: BRAND.to_string(),
        heading: HEADING.to_string(),
        timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
    }
}

/// Boxed panel with a title in the top border
pub fn panel(title: &str, body: &str, footer: &str, width: usize) -> Vec<String> {
    let inner = width.saturating_sub(4).max(1);
    let top_fill = inner.saturating_sub(title.chars().count());
    let bottom_fill = (inner + 1).saturating_sub(footer.chars().count());

    let mut lines = vec![format!("+ {} {}+", title, "-".repeat(top_fill))];
    for line in wrap(body, inner) {
        lines.push(format!("| {:<inner$} |", line, inner = inner));
    }
    lines.push(format!("+{}{} +", "-".repeat(bottom_fill), footer));
    lines
}

/// Two panels printed side by side, split by `||`
pub fn side_by_side(left: &[String], right: &[String], width: usize) -> Vec<String> {
    let rows = left.len().max(right.len());
    (0..rows)
        .map(|i| {
            two_columns(
                left.get(i).map(String::as_str).unwrap_or(""),
                right.get(i).map(String::as_str).unwrap_or(""),
                width,
                "||",
            )
        })
        .collect()
}

fn print_header(term: &mut Terminal, header: &ReceiptHeader) -> Result<()> {
    term.clear()?;
    let width = term.width();
    let bar = Receipt {
        header: header.clone(),
        title: String::new(),
        currency: String::new(),
        inputs: Vec::new(),
        results: Vec::new(),
        caption: String::new(),
    }
    .header_line(width);
    let bar = term.paint(&bar, Color::Red);
    term.say(rule(width, '='))?;
    term.say(bar)?;
    term.say(rule(width, '='))?;
    term.blank()
}

fn print_section_rule(term: &mut Terminal, title: &str) -> Result<()> {
    let line = center(&format!(" {} ", title), term.width(), '-');
    let line = term.paint(&line, Color::Blue);
    term.say(line)?;
    term.blank()
}

fn print_welcome(term: &mut Terminal) -> Result<()> {
    let width = term.width();
    let column = width.saturating_sub(2) / 2;

    let welcome = panel(
        "Welcome",
        "We offer two calculators: Investment Interest Calculator, and Mortgage Payment Calculator",
        " Make your choice below",
        width,
    );
    for line in welcome {
        term.say(line)?;
    }
    term.blank()?;

    let interest_panel = panel(
        "Interest",
        "Calculate the amount of interest you'll earn in the future on your investment. You can choose simple or compound interest. You'll need: deposit amount, annual %interest rate, years invested",
        " Type 'i' to select",
        column,
    );
    let mortgage_panel = panel(
        "Mortgage",
        "Calculate the monthly amount you'll have to repay for a mortgage. You'll need: present value of dwelling, annual %interest rate, years and months over which your mortgage loan will be repaid",
        " Type 'm' to select",
        column,
    );
    for line in side_by_side(&interest_panel, &mortgage_panel, width) {
        term.say(line)?;
    }
    term.blank()
}

fn print_interest_explanation(term: &mut Terminal) -> Result<()> {
    let width = term.width();
    let column = width.saturating_sub(2) / 2;
    let simple = panel(
        "Simple Interest",
        "Simple interest is calculated on your initial loan value, and the interest remains at the constant rate based on that principal sum",
        " Type 's' to select",
        column,
    );
    let compound = panel(
        "Compound Interest",
        "Compound interest means that the interest rate at each billing period applies to the principal plus interest accumulated",
        " Type 'c' to select",
        column,
    );
    for line in side_by_side(&simple, &compound, width) {
        term.say(line)?;
    }
    term.blank()
}

fn ask_calculator(term: &mut Terminal) -> Result<CalculatorChoice> {
    loop {
        let answer = term.ask_text("How can we help? [i/m]:")?;
        match CalculatorChoice::parse(&answer) {
            Some(choice) => return Ok(choice),
            None => term.warn("Not a valid input. Check spelling and type again.")?,
        }
    }
}

/// Interest inputs; the whole group is asked again when any value is negative
pub fn gather_interest(term: &mut Terminal) -> Result<InterestInputs> {
    loop {
        let notice = term.bold("All of your answers must be 0 or above");
        term.say(notice)?;
        let deposit = term.ask_float("What amount is currently deposited in your investment?")?;
        let annual = term.ask_float("What is the annual interest rate on your investment?")?;
        let years = term.ask_int("How many years will you keep your money invested?")?;

        match InterestInputs::new(deposit, annual, years) {
            Ok(inputs) => return Ok(inputs),
            Err(BootcampError::InvalidInput(reason)) => term.warn(&format!("{}. Try again.", reason))?,
            Err(e) => return Err(e),
        }
    }
}

/// Mortgage inputs with the monthly and annual rates reconciled
pub fn gather_mortgage(term: &mut Terminal) -> Result<MortgageInputs> {
    loop {
        let notice = term.bold("All of your answers must be 0 or above, and months should be less than 12");
        term.say(notice)?;
        let value = term.ask_float("What is the current value of the dwelling?")?;
        let monthly = term.ask_float("What is your monthly interest rate? Type 0 if you only know your annual rate")?;
        let annual = term.ask_float("What is the annual interest rate? Type 0 if you gave your monthly rate")?;
        let years = term.ask_int(
            "How many full years on the mortgage? You can specify additional months in the next question",
        )?;
        let months = term.ask_int(
            "How many months on top of the full years above will you be paying off the mortgage?",
        )?;

        let inputs = match MortgageInputs::new(value, annual, monthly, years, months) {
            Ok(inputs) => inputs,
            Err(BootcampError::InvalidInput(reason)) => {
                term.warn(&format!("{}. Try again.", reason))?;
                continue;
            }
            Err(e) => return Err(e),
        };

        let rates = reconcile_rates(inputs.monthly_pct, inputs.annual_pct);
        if rates.overridden {
            term.say("You have given both a monthly interest rate and an annual interest rate.")?;
            term.say("The monthly interest rate will overwrite the annual interest rate.")?;
            term.say(format!(
                "Monthly rate: {:.1}%, Annual rate: {:.1}%",
                rates.monthly_pct, rates.annual_pct
            ))?;
        }
        return Ok(MortgageInputs {
            monthly_pct: rates.monthly_pct,
            annual_pct: rates.annual_pct,
            ..inputs
        });
    }
}

pub fn run(term: &mut Terminal, config: &Config) -> Result<()> {
    let header = current_header();
    print_header(term, &header)?;
    print_welcome(term)?;

    let calculation = match ask_calculator(term)? {
        CalculatorChoice::Interest => {
            print_header(term, &header)?;
            print_section_rule(term, "Interest Calculator")?;
            print_interest_explanation(term)?;

            let kind = match term
                .ask_choice("Which type of interest are we helping you calculate?", &["s", "c"], None)?
                .as_str()
            {
                "s" => InterestKind::Simple,
                _ => InterestKind::Compound,
            };

            print_header(term, &header)?;
            print_section_rule(term, &format!("{} Calculator", kind.title()))?;
            let inputs = gather_interest(term)?;
            let result = interest(inputs.deposit, inputs.annual_pct, inputs.years, kind);
            Calculation::Interest { kind, inputs, result }
        }
        CalculatorChoice::Mortgage => {
            print_header(term, &header)?;
            print_section_rule(term, "Mortgage Payment Calculator")?;
            let inputs = gather_mortgage(term)?;
            let result = mortgage(&inputs);
            Calculation::Mortgage { inputs, result }
        }
    };
    info!(title = calculation.title(), "calculation complete");

    term.blank()?;
    let export = if term.confirm("After viewing your results, would you like to save a receipt?")? {
        let choice = term.ask_choice("Choose a format for your receipt", &ExportFormat::CHOICES, Some("image"))?;
        ExportFormat::parse(&choice)
    } else {
        None
    };

    term.say(rule(term.width(), '-'))?;
    term.progress().simulate("Calculations", 100);

    print_header(term, &header)?;
    let receipt = calculation.receipt(header.clone(), term.currency());
    let width = term.width();
    for (i, line) in receipt.table_lines(width).into_iter().enumerate() {
        let line = if i == 0 { term.bold(&line) } else { term.paint(&line, Color::Cyan) };
        term.say(line)?;
    }

    if let Some(format) = export {
        let path = receipt.export(format, &config.receipt_dir(), width)?;
        term.blank()?;
        term.say(center(
            &format!("Exported your {} receipt to \"{}\".", format.name(), path.display()),
            width,
            ' ',
        ))?;
        if config.finance.open_exports {
            term.say(center("It should open now, else you can find it in your file explorer.", width, ' '))?;
            if let Err(e) = viewer::open(&path) {
                warn!(error = %e, "receipt not opened");
                term.warn(&format!("Could not open the receipt: {}", e))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculator_choice_aliases() {
        assert_eq!(CalculatorChoice::parse("I"), Some(CalculatorChoice::Interest));
        assert_eq!(CalculatorChoice::parse("investment"), Some(CalculatorChoice::Interest));
        assert_eq!(CalculatorChoice::parse("Bond"), Some(CalculatorChoice::Mortgage));
        assert_eq!(CalculatorChoice::parse("m"), Some(CalculatorChoice::Mortgage));
        assert_eq!(CalculatorChoice::parse("savings"), None);
    }

    #[test]
    fn test_panel_shape() {
        let lines = panel("Interest", "some words to wrap inside the panel body", " Type 'i'", 24);
        assert!(lines.iter().all(|l| l.chars().count() == 24), "{:?}", lines);
        assert!(lines[0].starts_with("+ Interest"));
        assert!(lines.last().unwrap().ends_with(" Type 'i' +"));
    }

    #[test]
    fn test_timestamp_format() {
        let header = current_header();
        // e.g. "Mon Jan 01, 2024, 09:30AM"
        assert!(header.timestamp.ends_with("AM") || header.timestamp.ends_with("PM"));
        assert_eq!(header.timestamp.matches(',').count(), 2);
    }

    #[test]
    fn test_mortgage_inputs_reask_and_reconcile() {
        let (mut term, out) = Terminal::scripted([
            "100000", "0.5", "6", "1", "12", // months too large
            "100000", "0.5", "3", "1", "0",
        ]);
        let inputs = gather_mortgage(&mut term).unwrap();
        let text = out.contents();
        assert!(text.contains("less than 12"));
        assert!(text.contains("The monthly interest rate will overwrite the annual interest rate."));
        assert!((inputs.annual_pct - 6.0).abs() < 1e-9);
        assert_eq!(inputs.total_months(), 12);
    }

    #[test]
    fn test_simple_interest_session() {
        let (mut term, out) = Terminal::scripted(["x", "i", "s", "1000", "5", "5", "n"]);
        run(&mut term, &Config::default()).unwrap();
        let text = out.contents();
        assert!(text.contains("Not a valid input"));
        assert!(text.contains("Simple Interest Results"));
        assert!(text.contains("1,250.00"));
        assert!(text.contains("Thank you for using our services"));
    }

    #[test]
    fn test_mortgage_session_exports_text_receipt() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.finance.receipt_dir = dir.path().to_string_lossy().into_owned();
        config.finance.open_exports = false;

        let (mut term, out) = Terminal::scripted(["bond", "1000", "0", "5", "5", "0", "y", "text"]);
        run(&mut term, &config).unwrap();

        assert!(out.contents().contains("Mortgage Payment Results"));
        let receipt = std::fs::read_to_string(dir.path().join("receipt.txt")).unwrap();
        assert!(receipt.contains("Monthly Repayment (£)"));
        assert!(receipt.contains("18.87"));
    }
}
