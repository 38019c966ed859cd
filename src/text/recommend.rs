//! "Watch next" recommendations from a movies file
//!
//! Each line is `Title :Description`; the first colon separates the two.

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::similarity::{cosine, term_frequencies};
use crate::console::display::wrap;
use crate::console::Terminal;
use crate::errors::{BootcampError, Result};

/// Description of Planet Hulk, used when the user gives none
pub const DEFAULT_DESCRIPTION: &str = "Will he save their world or destroy it? When the Hulk becomes too dangerous for the Earth, the Illuminati trick Hulk into a shuttle and launch him into space to a planet where the Hulk can live in peace. Unfortunately, Hulk lands on the planet Sakaar where he is sold into slavery and trained as a gladiator.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub description: String,
}

/// Parse movie lines, skipping blanks
pub fn parse_movies(contents: &str) -> Result<Vec<Movie>> {
    let mut movies = Vec::new();
    for (i, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (title, description) = line.split_once(':').ok_or_else(|| {
            BootcampError::Dataset(format!("line {} has no ':' separator: {}", i + 1, line))
        })?;
        movies.push(Movie {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
        });
    }
    Ok(movies)
}

pub fn load_movies(path: &Path) -> Result<Vec<Movie>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        BootcampError::Dataset(format!("cannot read movies file {}: {}", path.display(), e))
    })?;
    let movies = parse_movies(&contents)?;
    info!(path = %path.display(), count = movies.len(), "loaded movies");
    Ok(movies)
}

/// Most similar movie and its score; `None` when nothing overlaps
pub fn recommend<'a>(description: &str, movies: &'a [Movie]) -> Option<(&'a Movie, f64)> {
    let wanted = term_frequencies(description);
    let mut best: Option<(&Movie, f64)> = None;

    for movie in movies {
        let score = cosine(&wanted, &term_frequencies(&movie.description));
        debug!(title = %movie.title, score, "scored movie");
        // Ties keep the earlier movie
        if score > best.map(|(_, s)| s).unwrap_or(0.0) {
            best = Some((movie, score));
        }
    }
    best
}

pub fn run(term: &mut Terminal, movies_path: &Path) -> Result<()> {
    let movies = load_movies(movies_path)?;
    let width = term.width();

    let answer = term.ask_text("Describe the movie you just watched (leave blank for Planet Hulk):")?;
    let description = if answer.trim().is_empty() {
        for line in wrap(DEFAULT_DESCRIPTION, width) {
            term.say(line)?;
        }
        DEFAULT_DESCRIPTION.to_string()
    } else {
        answer
    };

    match recommend(&description, &movies) {
        Some((movie, score)) => {
            let title = term.bold(&movie.title);
            term.say(format!("Recommended movie to watch next: {} (similarity {:.2})", title, score))
        }
        None => term.warn("No movie in the list resembles that description."),
    }
}
