//! Numeric exercises: triangle area, factorial and running averages

use tracing::debug;

use crate::console::display::{center, rule};
use crate::console::Terminal;
use crate::errors::{BootcampError, Result};

/// Value that ends average input
pub const SENTINEL: f64 = -1.0;

/// Area from three side lengths by Heron's formula
pub fn triangle_area(a: f64, b: f64, c: f64) -> Result<f64> {
    if [a, b, c].iter().any(|side| !side.is_finite() || *side <= 0.0) {
        return Err(BootcampError::InvalidInput(
            "side lengths must be positive numbers".to_string(),
        ));
    }
    if a + b <= c || a + c <= b || b + c <= a {
        return Err(BootcampError::InvalidInput(format!(
            "sides {}, {} and {} do not make a triangle",
            a, b, c
        )));
    }

    let s = (a + b + c) / 2.0;
    Ok((s * (s - a) * (s - b) * (s - c)).sqrt())
}

/// n! with overflow detection; 0! is 1
pub fn factorial(n: u64) -> Result<u64> {
    (1..=n).try_fold(1u64, |acc, i| {
        acc.checked_mul(i)
            .ok_or_else(|| BootcampError::Overflow(format!("{}! does not fit in 64 bits", n)))
    })
}

/// Arithmetic mean; `None` for an empty slice
pub fn calculate_average(numbers: &[f64]) -> Option<f64> {
    if numbers.is_empty() {
        return None;
    }
    Some(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

/// Running total fed until the sentinel arrives
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Averager {
    count: usize,
    total: f64,
}

impl Averager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value; returns false (and adds nothing) on the sentinel
    pub fn push(&mut self, value: f64) -> bool {
        if value == SENTINEL {
            return false;
        }
        self.count += 1;
        self.total += value;
        true
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.total / self.count as f64)
        }
    }

    /// Centred result lines
    pub fn summary(&self, width: usize) -> Vec<String> {
        let mut lines = vec![
            rule(width, '='),
            center(&format!("{} numbers supplied.", self.count), width, ' '),
        ];
        match self.average() {
            Some(avg) => {
                lines.push(center(
                    &format!("{:.4} is the grand total.", self.total),
                    width,
                    ' ',
                ));
                lines.push(center(&format!("Avg: {:.4}.", avg), width, ' '));
            }
            None => lines.push(center("No numbers supplied.", width, ' ')),
        }
        lines.push(rule(width, '='));
        lines
    }
}

pub fn run_triangle(term: &mut Terminal) -> Result<()> {
    term.say("Let me help you find the area of a triangle, by giving me its three side lengths.")?;
    loop {
        let a = term.ask_float("Side length 1:")?;
        let b = term.ask_float("Side length 2:")?;
        let c = term.ask_float("Side length 3:")?;

        match triangle_area(a, b, c) {
            Ok(area) => return term.say(format!("Your triangle has area = {}", area)),
            Err(BootcampError::InvalidInput(reason)) => {
                term.warn(&format!("Those sides won't work: {}. Try again.", reason))?
            }
            Err(e) => return Err(e),
        }
    }
}

pub fn run_factorial(term: &mut Terminal) -> Result<()> {
    let n: u64 = term.ask_parsed(
        "Which number would you like the factorial of?",
        "Please enter a whole number of 0 or more.",
    )?;
    match factorial(n) {
        Ok(value) => term.say(format!("{}! = {}", n, value)),
        Err(BootcampError::Overflow(reason)) => term.warn(&format!("Too big: {}.", reason)),
        Err(e) => Err(e),
    }
}

pub fn run_average(term: &mut Terminal) -> Result<()> {
    let width = term.width();
    term.say(rule(width, '='))?;
    term.say("Welcome to the average calculator.")?;
    term.say("I will calculate the averages of numbers you give to me.")?;
    term.say("Enter '-1' when you have finished entering numbers to average.")?;
    term.say(rule(width, '='))?;

    let mut averager = Averager::new();
    loop {
        let value = term.ask_float("Enter the next number to add to the grand total, or '-1' when finished.")?;
        if !averager.push(value) {
            break;
        }
    }
    debug!(count = averager.count(), "average input finished");

    for line in averager.summary(width) {
        term.say(line)?;
    }
    Ok(())
}
