//! Command routing shared by the binary and the interactive menu

use std::path::Path;
use tracing::{debug, info};

use crate::cli::{Commands, Config};
use crate::console::display::{rule, shaded_title};
use crate::console::{menu, Terminal};
use crate::errors::{BootcampError, Result};
use crate::{exercises, finance, sentiment, text};

/// Run one command against the terminal
pub fn dispatch(command: &Commands, term: &mut Terminal, config: &Config) -> Result<()> {
    dispatch_with(command, term, config, None)
}

/// Like [`dispatch`], with the `--config` path used to load `config`
///
/// `config --save` writes there; `None` means the default location.
pub fn dispatch_with(
    command: &Commands,
    term: &mut Terminal,
    config: &Config,
    config_path: Option<&Path>,
) -> Result<()> {
    debug!(?command, "dispatching");

    match command {
        Commands::Menu => menu::run_menu(term, config),
        Commands::Age => exercises::age::run(term),
        Commands::Award => exercises::award::run(term),
        Commands::Cafe => exercises::cafe::run(term),
        Commands::Holiday => exercises::holiday::run(term),
        Commands::Triangle => exercises::numbers::run_triangle(term),
        Commands::Factorial => exercises::numbers::run_factorial(term),
        Commands::Average => exercises::numbers::run_average(term),
        Commands::Pattern => exercises::pattern::run(term),
        Commands::Vocab => exercises::words::run_vocab(term),
        Commands::Alternate => exercises::words::run_alternate(term),
        Commands::Manipulate => exercises::words::run_manipulate(term),
        Commands::Garden { file } => exercises::garden::run(term, file.as_deref()),
        Commands::Finance => finance::session::run(term, config),
        Commands::Sentiment { csv, json } => sentiment::run(term, config, csv, *json),
        Commands::Recommend { movies } => text::recommend::run(term, movies),
        Commands::Config { save } => {
            show_config(term, config, config_path)?;
            if *save {
                let path = match config_path {
                    Some(path) => path.to_path_buf(),
                    None => Config::default_path().ok_or_else(|| {
                        BootcampError::ConfigError("no home directory for the config file".to_string())
                    })?,
                };
                config.save(&path)?;
                info!(path = %path.display(), "configuration saved");
                term.say(format!("Configuration saved to {}", path.display()))?;
            }
            Ok(())
        }
    }
}

/// Print the effective configuration as TOML
pub fn show_config(term: &mut Terminal, config: &Config, source: Option<&Path>) -> Result<()> {
    let width = term.width();
    term.say(rule(width, '='))?;
    term.say(shaded_title("BOOTCAMP CONFIGURATION", width, '~'))?;
    term.say(rule(width, '='))?;

    match source.map(Path::to_path_buf).or_else(Config::default_path) {
        Some(path) if path.exists() => term.say(format!("# Loaded from {}", path.display()))?,
        Some(path) => term.say(format!("# Built-in defaults ({} not found)", path.display()))?,
        None => term.say("# Built-in defaults")?,
    }

    let rendered = toml::to_string_pretty(config)
        .map_err(|e| BootcampError::ConfigError(format!("Failed to serialize config: {}", e)))?;
    for line in rendered.lines() {
        term.say(line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_cafe() {
        let (mut term, out) = Terminal::scripted(Vec::<String>::new());
        dispatch(&Commands::Cafe, &mut term, &Config::default()).unwrap();
        assert!(out.contents().contains("The total stock worth in the cafe is: £385.00"));
    }

    #[test]
    fn test_dispatch_reports_closed_input() {
        let (mut term, _out) = Terminal::scripted(Vec::<String>::new());
        let err = dispatch(&Commands::Age, &mut term, &Config::default()).unwrap_err();
        assert!(matches!(err, BootcampError::InputClosed { .. }));
    }

    #[test]
    fn test_config_save_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.display.width = 100;

        let (mut term, out) = Terminal::scripted(Vec::<String>::new());
        dispatch_with(&Commands::Config { save: true }, &mut term, &config, Some(&path)).unwrap();

        assert!(out.contents().contains("Configuration saved to"));
        assert_eq!(Config::load_from_file(&path).unwrap().display.width, 100);
    }

    #[test]
    fn test_show_config_is_toml() {
        let (mut term, out) = Terminal::scripted(Vec::<String>::new());
        show_config(&mut term, &Config::default(), None).unwrap();
        let text = out.contents();
        assert!(text.contains("[display]"));
        assert!(text.contains("[sentiment]"));
        assert!(text.contains("text_column = \"reviews.text\""));
    }
}
