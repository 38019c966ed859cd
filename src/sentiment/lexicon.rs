//! Lexicon polarity scorer
//!
//! Each polar word carries a score in [-1, 1]. Intensifiers scale the next
//! polar word, negators flip and damp it (x -0.5). A text's polarity is the
//! mean over its polar words; a text with none scores 0.

use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::{BootcampError, Result};
use crate::text::tokenize;

/// Anything that maps text to a polarity in [-1, 1]
pub trait PolarityScorer: Sync {
    fn polarity(&self, text: &str) -> f64;
}

const NEGATION_FACTOR: f64 = -0.5;

const BUILTIN: &[(&str, f64)] = &[
    ("amazing", 0.6), ("awesome", 1.0), ("beautiful", 0.85), ("best", 1.0), ("better", 0.5),
    ("bright", 0.7), ("brilliant", 0.9), ("cheap", 0.4), ("clear", 0.1), ("comfortable", 0.4),
    ("convenient", 0.4), ("cool", 0.35), ("crisp", 0.4), ("cute", 0.5), ("decent", 0.17),
    ("delicious", 1.0), ("delighted", 0.7), ("durable", 0.5), ("easy", 0.43), ("enjoy", 0.4),
    ("enjoyed", 0.4), ("excellent", 1.0), ("exceptional", 0.67), ("fabulous", 0.4),
    ("fantastic", 0.4), ("fast", 0.2), ("favorite", 0.5), ("favourite", 0.5), ("fine", 0.42),
    ("fun", 0.3), ("glad", 0.5), ("good", 0.7), ("gorgeous", 0.7), ("great", 0.8),
    ("handy", 0.4), ("happy", 0.8), ("helpful", 0.5), ("ideal", 0.9), ("impressed", 0.7),
    ("impressive", 1.0), ("incredible", 0.9), ("intuitive", 0.5), ("lightweight", 0.3),
    ("like", 0.2), ("liked", 0.2), ("love", 0.5), ("loved", 0.7), ("lovely", 0.5),
    ("loves", 0.5), ("nice", 0.6), ("perfect", 1.0), ("perfectly", 1.0), ("pleased", 0.5),
    ("positive", 0.23), ("powerful", 0.3), ("pretty", 0.25), ("quick", 0.33), ("quickly", 0.33),
    ("recommend", 0.4), ("recommended", 0.4), ("reliable", 0.5), ("responsive", 0.4),
    ("satisfied", 0.5), ("sharp", 0.3), ("simple", 0.2), ("smooth", 0.4), ("solid", 0.4),
    ("speedy", 0.4), ("sturdy", 0.4), ("superb", 1.0), ("terrific", 1.0),
    ("thrilled", 0.8), ("useful", 0.3), ("value", 0.3), ("well", 0.2), ("wonderful", 1.0),
    ("worth", 0.3), ("affordable", 0.4),
    ("annoying", -0.8), ("awful", -1.0), ("bad", -0.7), ("boring", -1.0), ("broke", -0.4),
    ("broken", -0.4), ("buggy", -0.5), ("cheaply", -0.3), ("clunky", -0.5), ("complicated", -0.4),
    ("confusing", -0.3), ("crap", -0.8), ("defective", -0.7), ("difficult", -0.5),
    ("disappointed", -0.75), ("disappointing", -0.6), ("dislike", -0.5), ("dull", -0.3),
    ("expensive", -0.5), ("fail", -0.5), ("failed", -0.5), ("faulty", -0.6), ("flimsy", -0.5),
    ("frustrating", -0.7), ("garbage", -0.8), ("hard", -0.29), ("hate", -0.8), ("hated", -0.9),
    ("horrible", -1.0), ("junk", -0.7), ("lag", -0.3), ("laggy", -0.4), ("mediocre", -0.3),
    ("poor", -0.4), ("poorly", -0.4), ("problem", -0.3), ("problems", -0.3), ("refund", -0.2),
    ("return", -0.1), ("returned", -0.3), ("sad", -0.5), ("slow", -0.3), ("stupid", -0.8),
    ("terrible", -1.0), ("trash", -0.8), ("ugly", -0.7), ("unhappy", -0.6), ("unreliable", -0.5),
    ("unusable", -0.6), ("useless", -0.5), ("waste", -0.6), ("weak", -0.38), ("worse", -0.4),
    ("worst", -1.0), ("wrong", -0.5),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.4), ("completely", 1.3), ("especially", 1.2), ("extremely", 1.5),
    ("highly", 1.4), ("incredibly", 1.5), ("most", 1.3), ("quite", 1.1), ("really", 1.3),
    ("so", 1.2), ("super", 1.3), ("totally", 1.3), ("truly", 1.3), ("very", 1.3),
];

const NEGATORS: &[&str] = &[
    "cannot", "hardly", "neither", "never", "no", "nobody", "none", "nor", "not", "nothing",
    "without",
];

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't") || word.ends_with("n\u{2019}t")
}

fn intensity(word: &str) -> Option<f64> {
    INTENSIFIERS.iter().find(|(w, _)| *w == word).map(|(_, f)| *f)
}

/// Word polarity table plus modifier rules
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    words: HashMap<String, f64>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// Built-in English lexicon
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN.iter().map(|(w, p)| (w.to_string(), *p)))
    }

    pub fn from_entries<I: IntoIterator<Item = (String, f64)>>(entries: I) -> Self {
        let words = entries
            .into_iter()
            .map(|(w, p)| (w.to_lowercase(), p.clamp(-1.0, 1.0)))
            .collect();
        Self { words }
    }

    /// Built-in lexicon, extended by an optional `word,polarity` CSV
    pub fn load(extra: Option<&Path>) -> Result<Self> {
        let mut lexicon = Self::builtin();
        if let Some(path) = extra {
            let added = lexicon.merge_csv(path)?;
            info!(path = %path.display(), added, "merged extra lexicon");
        }
        Ok(lexicon)
    }

    /// Merge `word,polarity` rows over the current entries
    ///
    /// A header row is optional. Returns how many rows were merged.
    pub fn merge_csv(&mut self, path: &Path) -> Result<usize> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut merged = 0;
        for (i, record) in reader.records().enumerate() {
            let record = record?;
            let (Some(word), Some(value)) = (record.get(0), record.get(1)) else {
                return Err(BootcampError::Dataset(format!(
                    "{} row {}: expected word,polarity",
                    path.display(),
                    i + 1
                )));
            };
            let polarity: f64 = match value.parse() {
                Ok(p) => p,
                // Header row
                Err(_) if i == 0 => continue,
                Err(_) => {
                    return Err(BootcampError::Dataset(format!(
                        "{} row {}: '{}' is not a number",
                        path.display(),
                        i + 1,
                        value
                    )))
                }
            };
            self.words.insert(word.to_lowercase(), polarity.clamp(-1.0, 1.0));
            merged += 1;
        }
        Ok(merged)
    }

    pub fn get(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl PolarityScorer for Lexicon {
    fn polarity(&self, text: &str) -> f64 {
        let mut scores = Vec::new();
        let mut multiplier = 1.0;
        let mut negated = false;

        for token in tokenize(text) {
            if token.is_punct() {
                // Modifiers do not cross clause boundaries
                multiplier = 1.0;
                negated = false;
                continue;
            }
            let word = token.text.to_lowercase();

            if is_negator(&word) {
                negated = true;
            } else if let Some(factor) = intensity(&word) {
                multiplier *= factor;
            } else if let Some(p) = self.words.get(&word) {
                let mut score = p * multiplier;
                if negated {
                    score *= NEGATION_FACTOR;
                }
                scores.push(score.clamp(-1.0, 1.0));
                multiplier = 1.0;
                negated = false;
            }
        }

        if scores.is_empty() {
            return 0.0;
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        debug!(polar_words = scores.len(), mean, "scored text");
        mean.clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_polarity() {
        let lex = Lexicon::builtin();
        assert!((lex.polarity("great tablet") - 0.8).abs() < 1e-9);
        assert!((lex.polarity("terrible purchase") + 1.0).abs() < 1e-9);
        assert_eq!(lex.polarity("tablet charger cable"), 0.0);
        assert_eq!(lex.polarity(""), 0.0);
    }

    #[test]
    fn test_mean_over_polar_words() {
        let lex = Lexicon::builtin();
        // good 0.7, bad -0.7
        assert!(lex.polarity("good screen bad battery").abs() < 1e-9);
    }

    #[test]
    fn test_intensifier_scales() {
        let lex = Lexicon::builtin();
        let plain = lex.polarity("good");
        let strong = lex.polarity("very good");
        assert!(strong > plain);
        assert!((strong - 0.91).abs() < 1e-9);
    }

    #[test]
    fn test_negation_flips_and_damps() {
        let lex = Lexicon::builtin();
        assert!((lex.polarity("not good") + 0.35).abs() < 1e-9);
        assert!((lex.polarity("isn't bad") - 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_modifiers_reset_at_punctuation() {
        let lex = Lexicon::builtin();
        assert!((lex.polarity("not. good") - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_result_is_clamped() {
        let lex = Lexicon::builtin();
        let p = lex.polarity("extremely absolutely excellent");
        assert!(p <= 1.0 && p > 0.99);
    }

    #[test]
    fn test_merge_csv_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extra.csv");
        std::fs::write(&path, "word,polarity\nkindle,0.5\ngood,-0.2\nwow,3\n").unwrap();

        let lex = Lexicon::load(Some(&path)).unwrap();
        assert_eq!(lex.get("kindle"), Some(0.5));
        assert_eq!(lex.get("good"), Some(-0.2));
        assert_eq!(lex.get("WOW"), Some(1.0));
        assert_eq!(lex.len(), Lexicon::builtin().len() + 2);
    }

    #[test]
    fn test_merge_csv_rejects_bad_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "kindle,0.5\ngood,lots\n").unwrap();
        let err = Lexicon::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }
}
