//! Product review sentiment analysis
//!
//! Loads a review CSV, cleans and labels every review, prints a short
//! summary and writes a PDF report next to the configured report directory.

pub mod dataset;
pub mod lexicon;
pub mod pipeline;
pub mod report;

pub use dataset::{load_reviews, read_reviews};
pub use lexicon::{Lexicon, PolarityScorer};
pub use pipeline::{
    chunk_size, clean_all, label_all, similarity_rows, Analysis, Review, Sentiment, SentimentSummary,
    SimilarityPair, Thresholds,
};
pub use report::{generate_pdf, report_file_name, write_report, ReportContext};

use chrono::Local;
use colored::Color;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

use crate::cli::Config;
use crate::console::display::rule;
use crate::console::Terminal;
use crate::errors::Result;
use crate::viewer;

impl Thresholds {
    pub fn from_config(config: &Config) -> Self {
        Self {
            positive: config.sentiment.positive_threshold,
            negative: config.sentiment.negative_threshold,
        }
    }
}

/// Machine-readable summary printed by `--json`
#[derive(Debug, Serialize)]
pub struct JsonSummary<'a> {
    pub source: String,
    pub summary: SentimentSummary,
    pub similarity: Option<&'a SimilarityPair>,
    pub report: Option<String>,
}

fn sentiment_color(sentiment: Sentiment) -> Color {
    match sentiment {
        Sentiment::Positive => Color::Green,
        Sentiment::Negative => Color::Red,
        Sentiment::Neutral => Color::Blue,
    }
}

fn print_sample(term: &mut Terminal, review: &Review) -> Result<()> {
    term.say("Random review sample:")?;
    term.say(format!("  Original: {}", review.raw))?;
    term.say(format!("  Cleaned:  {}", review.cleaned))?;
    let label = term.paint(&review.sentiment.to_string(), sentiment_color(review.sentiment));
    term.say(format!("  Sentiment: {}", label))?;
    Ok(())
}

fn print_summary(term: &mut Terminal, analysis: &Analysis) -> Result<()> {
    let summary = &analysis.summary;
    term.say(format!(
        "Analysed {} reviews: {} positive, {} negative, {} neutral.",
        summary.total, summary.positive, summary.negative, summary.neutral
    ))?;

    if let Some(pair) = &analysis.similarity {
        term.blank()?;
        term.say(format!("Review {}: {}", pair.first_row, pair.first))?;
        term.say(format!("Review {}: {}", pair.second_row, pair.second))?;
        term.say(format!(
            "The similarity score between the selected reviews is: {:.2}",
            pair.score
        ))?;
    }
    Ok(())
}

/// Full analysis of the reviews in `csv_path`
pub fn run(term: &mut Terminal, config: &Config, csv_path: &Path, json: bool) -> Result<()> {
    let settings = &config.sentiment;

    if !json {
        term.say(rule(term.width(), '='))?;
        term.say("Product review sentiment analysis")?;
        term.say("Cleaning and labeling reviews; this can take a while for large files.")?;
        term.say(rule(term.width(), '='))?;
    }

    let lexicon = Lexicon::load(config.lexicon_path().as_deref())?;
    let raw = load_reviews(csv_path, &settings.text_column)?;
    let workers = num_cpus::get();
    let chunk = chunk_size(raw.len(), workers);
    let thresholds = Thresholds::from_config(config);

    let analysis = Analysis::run(raw, &lexicon, &thresholds, settings.similarity_rows);

    if !json {
        if let Some(review) = analysis.reviews.choose(&mut rand::thread_rng()) {
            term.blank()?;
            print_sample(term, review)?;
        }
        term.blank()?;
        print_summary(term, &analysis)?;
    }

    let ctx = ReportContext {
        source: csv_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| csv_path.display().to_string()),
        column: settings.text_column.clone(),
        generated_at: Local::now(),
        workers,
        chunk_size: chunk,
        thresholds,
    };
    let path = write_report(&analysis, &ctx, &config.report_dir())?;
    info!(path = %path.display(), reviews = analysis.summary.total, "sentiment report ready");

    if json {
        let out = JsonSummary {
            source: ctx.source.clone(),
            summary: analysis.summary,
            similarity: analysis.similarity.as_ref(),
            report: Some(path.display().to_string()),
        };
        term.say(serde_json::to_string_pretty(&out)?)?;
        return Ok(());
    }

    term.blank()?;
    term.say(format!("Report saved to \"{}\".", path.display()))?;
    if settings.open_report {
        if let Err(e) = viewer::open(&path) {
            warn!(error = %e, "report not opened");
            term.warn(&format!("Could not open the report: {}", e))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "id,reviews.text\n\
        1,\"Great tablet, my kids love it!\"\n\
        2,Terrible battery. Returned it.\n\
        3,It is a tablet\n";

    fn config_in(dir: &Path) -> Config {
        let mut config = Config::default();
        config.sentiment.report_dir = dir.display().to_string();
        config.sentiment.open_report = false;
        config
    }

    #[test]
    fn test_run_prints_summary_and_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("reviews.csv");
        std::fs::write(&csv, CSV).unwrap();

        let (mut term, out) = Terminal::scripted(Vec::<String>::new());
        run(&mut term, &config_in(dir.path()), &csv, false).unwrap();

        let text = out.contents();
        assert!(text.contains("Analysed 3 reviews: 1 positive, 1 negative, 1 neutral."));
        assert!(text.contains("Random review sample:"));
        assert!(text.contains("similarity score"));

        let pdfs: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".pdf"))
            .collect();
        assert_eq!(pdfs.len(), 1);
    }

    #[test]
    fn test_run_json_summary() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("reviews.csv");
        std::fs::write(&csv, CSV).unwrap();

        let (mut term, out) = Terminal::scripted(Vec::<String>::new());
        run(&mut term, &config_in(dir.path()), &csv, true).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out.contents()).unwrap();
        assert_eq!(value["source"], "reviews.csv");
        assert_eq!(value["summary"]["total"], 3);
        assert_eq!(value["summary"]["positive"], 1);
        assert_eq!(value["similarity"]["first_row"], 0);
    }

    #[test]
    fn test_run_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let (mut term, _out) = Terminal::scripted(Vec::<String>::new());
        let err = run(&mut term, &config_in(dir.path()), &dir.path().join("nope.csv"), false).unwrap_err();
        assert!(err.to_string().contains("nope.csv"));
    }
}
