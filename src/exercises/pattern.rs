use crate::console::Terminal;
use crate::errors::Result;

/// Star arrow growing to `width` then shrinking back to one
pub fn arrow(width: usize) -> Vec<String> {
    (1..=width)
        .chain((1..width).rev())
        .map(|n| "*".repeat(n))
        .collect()
}

pub fn run(term: &mut Terminal) -> Result<()> {
    // Wider arrows would wrap on screen
    let max = term.width();
    let width = loop {
        let width: usize = term.ask_parsed(
            "How many units wide do you want your arrow star pattern to be?",
            "Please enter a whole number of 0 or more.",
        )?;
        if width <= max {
            break width;
        }
        term.warn(&format!("Please enter a width of at most {}.", max))?;
    };
    for line in arrow(width) {
        term.say(line)?;
    }
    Ok(())
}
