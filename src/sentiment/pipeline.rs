//! Review labeling pipeline
//!
//! Texts are cleaned and scored in parallel. Scoring splits the input into
//! one chunk per CPU (`len / cpus + 1` items each) so every worker gets a
//! contiguous slice; results are flattened back in input order.

use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use super::lexicon::PolarityScorer;
use crate::text::{cosine_similarity, preprocess};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        };
        f.write_str(name)
    }
}

/// Polarity cut-offs; values strictly beyond them are polar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub positive: f64,
    pub negative: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            positive: 0.1,
            negative: -0.1,
        }
    }
}

impl Sentiment {
    pub fn from_polarity(polarity: f64, thresholds: &Thresholds) -> Self {
        if polarity > thresholds.positive {
            Sentiment::Positive
        } else if polarity < thresholds.negative {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub raw: String,
    pub cleaned: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentSummary {
    pub fn count(reviews: &[Review]) -> Self {
        reviews.iter().fold(
            Self {
                total: reviews.len(),
                ..Self::default()
            },
            |mut acc, r| {
                match r.sentiment {
                    Sentiment::Positive => acc.positive += 1,
                    Sentiment::Negative => acc.negative += 1,
                    Sentiment::Neutral => acc.neutral += 1,
                }
                acc
            },
        )
    }

    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }
}

/// Similarity between two raw reviews, by row index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityPair {
    pub first_row: usize,
    pub second_row: usize,
    pub first: String,
    pub second: String,
    pub score: f64,
}

pub fn chunk_size(len: usize, workers: usize) -> usize {
    len / workers.max(1) + 1
}

/// Lowercase and strip stop words and punctuation from every text
pub fn clean_all(texts: &[String]) -> Vec<String> {
    texts.par_iter().map(|t| preprocess(t)).collect()
}

/// Label every text, preserving order
pub fn label_all<S>(texts: &[String], scorer: &S, thresholds: &Thresholds) -> Vec<Sentiment>
where
    S: PolarityScorer + ?Sized,
{
    if texts.is_empty() {
        return Vec::new();
    }
    let size = chunk_size(texts.len(), num_cpus::get());
    debug!(texts = texts.len(), chunk_size = size, "labeling in chunks");

    let chunks: Vec<Vec<Sentiment>> = texts
        .par_chunks(size)
        .map(|chunk| {
            chunk
                .iter()
                .map(|t| Sentiment::from_polarity(scorer.polarity(t), thresholds))
                .collect()
        })
        .collect();
    chunks.into_iter().flatten().collect()
}

/// Rows used for the similarity example
///
/// The configured rows when both exist, otherwise the first and last rows.
/// Fewer than two rows leaves nothing to compare.
pub fn similarity_rows(len: usize, preferred: [usize; 2]) -> Option<(usize, usize)> {
    if len < 2 {
        return None;
    }
    let [a, b] = preferred;
    if a < len && b < len && a != b {
        Some((a, b))
    } else {
        Some((0, len - 1))
    }
}

/// Everything the report needs from one run
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub reviews: Vec<Review>,
    pub summary: SentimentSummary,
    pub similarity: Option<SimilarityPair>,
}

impl Analysis {
    pub fn run<S>(raw: Vec<String>, scorer: &S, thresholds: &Thresholds, preferred_rows: [usize; 2]) -> Self
    where
        S: PolarityScorer + ?Sized,
    {
        let cleaned = clean_all(&raw);
        let labels = label_all(&cleaned, scorer, thresholds);

        let reviews: Vec<Review> = raw
            .into_iter()
            .zip(cleaned)
            .zip(labels)
            .map(|((raw, cleaned), sentiment)| Review { raw, cleaned, sentiment })
            .collect();
        let summary = SentimentSummary::count(&reviews);
        info!(
            total = summary.total,
            positive = summary.positive,
            negative = summary.negative,
            neutral = summary.neutral,
            "sentiment labeled"
        );

        // Raw text keeps the nuance that cleaning removes
        let similarity = similarity_rows(reviews.len(), preferred_rows).map(|(a, b)| SimilarityPair {
            first_row: a,
            second_row: b,
            first: reviews[a].raw.clone(),
            second: reviews[b].raw.clone(),
            score: cosine_similarity(&reviews[a].raw, &reviews[b].raw),
        });

        Self {
            reviews,
            summary,
            similarity,
        }
    }

    /// First review carrying each label
    pub fn first_with(&self, sentiment: Sentiment) -> Option<&Review> {
        self.reviews.iter().find(|r| r.sentiment == sentiment)
    }
}
