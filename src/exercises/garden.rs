//! Garden-path sentences broken into tokens, stop words and content words
//!
//! Ends with an alphabetical glossary of every content word seen.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::console::display::ledger_line;
use crate::console::Terminal;
use crate::errors::{BootcampError, Result};
use crate::text::tokenize;

pub const GARDEN_PATH_SENTENCES: &[&str] = &[
    "The old man the boats.",
    "The horse raced past the barn fell.",
    "The man whistling tunes pianos.",
    "The girl told the story cried.",
    "The man who hunts ducks out on weekends.",
    "Fat people eat accumulates.",
    "Apple that the farmer grows is delicious.",
    "May that we all love is sunny.",
    "The Amazon that explorers discovered is vast.",
    "The Jaguar that lives in the zoo is fast.",
    "The man the professor the student has studies Rome 101AD.",
    "Mary gave the child a Band-Aid.",
    "That Jill is never here hurts.",
    "The cotton clothing is made of grows in Mississippi.",
];

/// Token breakdown of one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceBreakdown {
    pub sentence: String,
    pub tokens: Vec<String>,
    pub stop_words: Vec<String>,
    pub content_words: Vec<String>,
}

impl SentenceBreakdown {
    pub fn of(sentence: &str) -> Self {
        let tokens = tokenize(sentence);
        Self {
            sentence: sentence.to_string(),
            tokens: tokens.iter().filter(|t| !t.is_punct()).map(|t| t.text.clone()).collect(),
            stop_words: tokens.iter().filter(|t| t.is_stop()).map(|t| t.text.clone()).collect(),
            content_words: tokens.iter().filter(|t| t.is_content()).map(|t| t.text.clone()).collect(),
        }
    }
}

/// Lowercased content word counts, alphabetical
pub fn glossary(breakdowns: &[SentenceBreakdown]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for word in breakdowns.iter().flat_map(|b| b.content_words.iter()) {
        *counts.entry(word.to_lowercase()).or_insert(0) += 1;
    }
    counts
}

/// One sentence per non-blank line
pub fn load_sentences(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    let sentences: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();
    if sentences.is_empty() {
        return Err(BootcampError::Dataset(format!(
            "{} contains no sentences",
            path.display()
        )));
    }
    Ok(sentences)
}

fn list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|i| format!("'{}'", i)).collect();
    format!("[{}]", quoted.join(", "))
}

pub fn run(term: &mut Terminal, file: Option<&Path>) -> Result<()> {
    let sentences = match file {
        Some(path) => load_sentences(path)?,
        None => GARDEN_PATH_SENTENCES.iter().map(|s| s.to_string()).collect(),
    };
    info!(count = sentences.len(), "analysing sentences");

    let breakdowns: Vec<SentenceBreakdown> = sentences.iter().map(|s| SentenceBreakdown::of(s)).collect();
    for b in &breakdowns {
        term.say(format!("Original: {}", b.sentence))?;
        term.say("Tokenised view of the sentence, ignoring spaces and punctuation:")?;
        term.say(list(&b.tokens))?;
        term.say("Stop words in original sentence, which will be ignored for the purpose of NLP:")?;
        term.say(list(&b.stop_words))?;
        term.say("Meaningful words left once stop words and punctuation are removed:")?;
        term.say(list(&b.content_words))?;
        term.blank()?;
    }

    let width = term.width();
    term.say(format!("{:-^width$}", "GLOSSARY: CONTENT WORD OCCURRENCES", width = width))?;
    for (word, count) in glossary(&breakdowns) {
        term.say(ledger_line(&word, &count.to_string(), width))?;
    }
    Ok(())
}
