//! Command-line argument parsing for bootcamp
//!
//! Provides clap-based CLI with one subcommand per exercise and verbosity
//! control. Every subcommand can run without arguments and prompts for what
//! it needs.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bootcamp - coursework calculators and text tools for the terminal
#[derive(Parser, Debug)]
#[command(name = "bootcamp")]
#[command(author = "Jerome (Kubashen) Naidoo")]
#[command(version)]
#[command(about = "Interactive coursework calculators, word exercises and review sentiment analysis", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (debug), -vvv (trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no progress bars, errors only in the log)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand; the interactive menu runs when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Pick an exercise from the interactive menu
    Menu,

    /// Classify an age into a message
    Age,

    /// Triathlon total time and award
    Award,

    /// Total stock worth of the cafe
    Cafe,

    /// Holiday expense calculator
    Holiday,

    /// Triangle area from three sides (Heron's formula)
    Triangle,

    /// Factorial of a whole number
    Factorial,

    /// Running average until -1 is entered
    Average,

    /// Arrow-shaped star pattern
    Pattern,

    /// Prefix and suffix vocabulary helpers
    Vocab,

    /// AlTeRnAtE character and word casing
    Alternate,

    /// Sentence manipulation exercise
    Manipulate,

    /// Token and stop-word breakdown of garden-path sentences
    Garden {
        /// File with one sentence per line (built-in sentences if omitted)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Investment interest and mortgage payment calculators
    Finance,

    /// Product review sentiment analysis with PDF report
    Sentiment {
        /// Reviews CSV file
        #[arg(long, default_value = "amazon_product_reviews.csv")]
        csv: PathBuf,

        /// Print a JSON summary instead of the prose summary
        #[arg(long)]
        json: bool,
    },

    /// Recommend the movie most similar to a description
    Recommend {
        /// File with one `Title :Description` per line
        #[arg(long, default_value = "movies.txt")]
        movies: PathBuf,
    },

    /// Display current configuration
    Config {
        /// Also write it to the config file (--config path or the default location)
        #[arg(long)]
        save: bool,
    },
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                2 => Verbosity::Debug,
                _ => Verbosity::Trace,
            }
        }
    }

    /// Subcommand to run, defaulting to the menu
    pub fn command_or_menu(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Menu)
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::Debug => "debug",
            Verbosity::Trace => "trace",
        }
    }

    /// Default tracing filter directive for this level
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
            Verbosity::Trace => "trace",
        }
    }

    /// Check if should show progress bars
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}
