//! bootcamp - Main CLI Entry Point

use anyhow::{Context, Result};
use bootcamp::{
    cli::{Args, Config},
    console::{DisplaySettings, Terminal},
    app::dispatch_with,
    logging::init_logging,
    BootcampError,
};
use clap::Parser;
use colored::Colorize;

fn main() {
    if let Err(err) = run() {
        match err.downcast_ref::<BootcampError>() {
            Some(BootcampError::InputClosed { prompt }) => {
                eprintln!("\n{} input ended while waiting for: {}", "Error:".red().bold(), prompt);
            }
            _ => eprintln!("{} {:#}", "Error:".red().bold(), err),
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let verbosity = args.verbosity();
    init_logging(verbosity);

    let config = Config::load(args.config.clone()).context("loading configuration")?;
    config.validate()?;

    if !config.display.color {
        colored::control::set_override(false);
    }

    let settings = DisplaySettings::from_config(&config, verbosity.show_progress());
    let mut term = Terminal::stdio(settings, Config::history_path())?;

    dispatch_with(&args.command_or_menu(), &mut term, &config, args.config.as_deref())?;
    Ok(())
}
