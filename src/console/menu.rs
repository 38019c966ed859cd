//! Interactive exercise menu
//!
//! Shown when `bootcamp` runs without a subcommand. Entries can be picked by
//! number or by name; `help` reprints the list and `exit` leaves.

use colored::Color;
use std::path::PathBuf;

use crate::cli::{Commands, Config};
use crate::console::display::{rule, shaded_title};
use crate::console::Terminal;
use crate::errors::{BootcampError, Result};

/// Menu input types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Commands),
    Help,
    Exit,
    Unknown { input: String },
}

/// One selectable exercise
struct MenuEntry {
    name: &'static str,
    description: &'static str,
}

const ENTRIES: &[MenuEntry] = &[
    MenuEntry { name: "age", description: "Age classifier" },
    MenuEntry { name: "award", description: "Triathlon award calculator" },
    MenuEntry { name: "cafe", description: "Cafe stock valuation" },
    MenuEntry { name: "holiday", description: "Holiday expense calculator" },
    MenuEntry { name: "triangle", description: "Triangle area (Heron's formula)" },
    MenuEntry { name: "factorial", description: "Factorial" },
    MenuEntry { name: "average", description: "Average calculator (-1 to finish)" },
    MenuEntry { name: "pattern", description: "Arrow star pattern" },
    MenuEntry { name: "vocab", description: "Prefix and suffix vocabulary" },
    MenuEntry { name: "alternate", description: "AlTeRnAtE casing" },
    MenuEntry { name: "manipulate", description: "Sentence manipulation" },
    MenuEntry { name: "garden", description: "Garden-path sentence tokens" },
    MenuEntry { name: "finance", description: "Interest and mortgage calculators" },
    MenuEntry { name: "sentiment", description: "Review sentiment analysis + PDF report" },
    MenuEntry { name: "recommend", description: "Movie recommendation" },
];

/// Command for a menu entry name, with default arguments
fn command_for(name: &str) -> Option<Commands> {
    let command = match name {
        "age" => Commands::Age,
        "award" => Commands::Award,
        "cafe" => Commands::Cafe,
        "holiday" => Commands::Holiday,
        "triangle" => Commands::Triangle,
        "factorial" => Commands::Factorial,
        "average" => Commands::Average,
        "pattern" => Commands::Pattern,
        "vocab" => Commands::Vocab,
        "alternate" => Commands::Alternate,
        "manipulate" => Commands::Manipulate,
        "garden" => Commands::Garden { file: None },
        "finance" => Commands::Finance,
        "sentiment" => Commands::Sentiment {
            csv: PathBuf::from("amazon_product_reviews.csv"),
            json: false,
        },
        "recommend" => Commands::Recommend {
            movies: PathBuf::from("movies.txt"),
        },
        _ => return None,
    };
    Some(command)
}

/// Parse a menu answer
pub fn parse(input: &str) -> MenuChoice {
    let trimmed = input.trim().to_lowercase();

    match trimmed.as_str() {
        "help" | "h" | "?" => return MenuChoice::Help,
        "exit" | "quit" | "q" => return MenuChoice::Exit,
        _ => {}
    }

    let name = match trimmed.parse::<usize>() {
        Ok(n) if n >= 1 && n <= ENTRIES.len() => ENTRIES[n - 1].name.to_string(),
        _ => trimmed,
    };

    match command_for(&name) {
        Some(command) => MenuChoice::Run(command),
        None => MenuChoice::Unknown {
            input: input.to_string(),
        },
    }
}

/// Print the numbered list of exercises
pub fn show_help(term: &mut Terminal) -> Result<()> {
    let width = term.width();
    term.say(rule(width, '='))?;
    term.say(shaded_title("BOOTCAMP EXERCISES", width, '~'))?;
    term.say(rule(width, '='))?;

    for (i, entry) in ENTRIES.iter().enumerate() {
        let name = term.paint(&format!("{:<12}", entry.name), Color::Green);
        term.say(format!("  {:>2}. {} {}", i + 1, name, entry.description))?;
    }
    term.blank()?;
    term.say("Type a number or a name, 'help' to list again, 'exit' to quit.")?;
    Ok(())
}

/// Menu loop; returns when the user exits or input ends
pub fn run_menu(term: &mut Terminal, config: &Config) -> Result<()> {
    show_help(term)?;

    loop {
        let answer = match term.ask_text("\nbootcamp>") {
            Ok(answer) => answer,
            Err(BootcampError::InputClosed { .. }) => break,
            Err(e) => return Err(e),
        };
        if answer.trim().is_empty() {
            continue;
        }

        match parse(&answer) {
            MenuChoice::Run(command) => {
                // One failing exercise should not end the session
                match crate::app::dispatch(&command, term, config) {
                    Ok(()) => {}
                    Err(BootcampError::InputClosed { .. }) => break,
                    Err(e) => {
                        let line = term.paint(&format!("Error: {}", e), Color::Red);
                        term.say(line)?;
                    }
                }
            }
            MenuChoice::Help => show_help(term)?,
            MenuChoice::Exit => break,
            MenuChoice::Unknown { input } => {
                let line = term.paint(&format!("Unknown exercise: {}", input.trim()), Color::Red);
                term.say(line)?;
                term.say("Type 'help' for available exercises")?;
            }
        }
    }

    term.say("Goodbye!")?;
    Ok(())
}
