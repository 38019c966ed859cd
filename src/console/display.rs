//! Layout helpers for decorated console output
//!
//! Pure string builders (centering, rules, ledger lines, money formatting)
//! plus the progress bar used to pace longer calculations.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Center `text` in `width` columns, padding with `fill`
///
/// Text wider than `width` is returned unchanged.
pub fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = width - len;
    let left = pad / 2;
    let right = pad - left;
    format!(
        "{}{}{}",
        fill.to_string().repeat(left),
        text,
        fill.to_string().repeat(right)
    )
}

/// Horizontal rule
pub fn rule(width: usize, ch: char) -> String {
    ch.to_string().repeat(width)
}

/// Title centred in a shaded band, e.g. `####  FINNEGAN FINANCE  ####`
pub fn shaded_title(title: &str, width: usize, shade: char) -> String {
    let padded = format!("  {}  ", title);
    center(&padded, width, shade)
}

/// Accounting style line: label, underscores, right-aligned value
pub fn ledger_line(label: &str, value: &str, width: usize) -> String {
    let value_len = value.chars().count();
    let label_width = width.saturating_sub(value_len);
    let mut line = label.to_string();
    let label_len = label.chars().count();
    if label_len < label_width {
        line.push_str(&"_".repeat(label_width - label_len));
    }
    line.push_str(value);
    line
}

/// Two centred columns separated by `sep`
pub fn two_columns(left: &str, right: &str, width: usize, sep: &str) -> String {
    let column = width.saturating_sub(sep.chars().count()) / 2;
    format!("{}{}{}", center(left, column, ' '), sep, center(right, column, ' '))
}

/// Greedy word wrap at `width` columns
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Format with fixed decimals and comma thousands separators
///
/// `format_thousands(1234567.891, 2) == "1,234,567.89"`
pub fn format_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (whole, frac) = match formatted.split_once('.') {
        Some((w, f)) => (w.to_string(), Some(f.to_string())),
        None => (formatted.clone(), None),
    };

    let digits: Vec<char> = whole.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    // "-0.00" reads badly on a receipt
    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    match frac {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Currency amount with thousands separators and 2 decimals
pub fn money(currency: &str, value: f64) -> String {
    if value < 0.0 {
        format!("-{}{}", currency, format_thousands(-value, 2))
    } else {
        format!("{}{}", currency, format_thousands(value, 2))
    }
}

/// Progress bar pacing a simulated calculation
pub struct ProgressDisplay {
    step: Duration,
    enabled: bool,
}

impl ProgressDisplay {
    pub fn new(step: Duration, enabled: bool) -> Self {
        Self { step, enabled }
    }

    /// Create the styled bar (hidden when disabled)
    pub fn start(&self, label: &str, steps: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(steps);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.cyan} {msg} [{bar:40.cyan/blue}] {percent}% | {elapsed_precise} (eta {eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        pb.set_style(style);
        pb.set_message(label.to_string());
        pb
    }

    /// Advance a bar through `steps` ticks, sleeping between them
    pub fn simulate(&self, label: &str, steps: u64) {
        let pb = self.start(label, steps);
        for _ in 0..steps {
            if self.enabled {
                std::thread::sleep(self.step);
            }
            pb.inc(1);
        }
        pb.finish_with_message(format!("{} done", label));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_even_and_odd() {
        assert_eq!(center("ab", 6, '*'), "**ab**");
        assert_eq!(center("abc", 6, '-'), "-abc--");
        assert_eq!(center("too long", 3, ' '), "too long");
    }

    #[test]
    fn test_shaded_title() {
        let line = shaded_title("YOUR RESULTS", 30, '#');
        assert_eq!(line.chars().count(), 30);
        assert!(line.contains("  YOUR RESULTS  "));
        assert!(line.starts_with('#'));
    }

    #[test]
    fn test_ledger_line_fills_width() {
        let line = ledger_line("Deposit amount:", "£1000.00", 40);
        assert_eq!(line.chars().count(), 40);
        assert!(line.starts_with("Deposit amount:___"));
        assert!(line.ends_with("£1000.00"));
    }

    #[test]
    fn test_two_columns() {
        let line = two_columns("LEFT", "RIGHT", 22, "||");
        assert_eq!(line, "   LEFT   ||  RIGHT   ");
    }

    #[test]
    fn test_wrap() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_thousands(999.0, 2), "999.00");
        assert_eq!(format_thousands(1000.0, 0), "1,000");
        assert_eq!(format_thousands(-1500.5, 1), "-1,500.5");
        assert_eq!(format_thousands(-0.001, 2), "0.00");
    }

    #[test]
    fn test_money() {
        assert_eq!(money("£", 1250.0), "£1,250.00");
        assert_eq!(money("$", -3.5), "-$3.50");
    }

    #[test]
    fn test_disabled_progress_is_hidden() {
        let progress = ProgressDisplay::new(Duration::from_millis(0), false);
        let pb = progress.start("Calculations", 10);
        assert!(pb.is_hidden());
        progress.simulate("Calculations", 10);
    }
}
