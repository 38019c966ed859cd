//! Review CSV loading
//!
//! Only the review text column is read. Rows with a missing or blank text
//! are dropped, so row numbers afterwards refer to the surviving reviews.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::{BootcampError, Result};

/// Review texts from any CSV reader
pub fn read_reviews<R: Read>(reader: R, column: &str) -> Result<Vec<String>> {
    let mut csv = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let index = csv
        .headers()?
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| BootcampError::Dataset(format!("column '{}' not found", column)))?;

    let mut texts = Vec::new();
    let mut dropped = 0usize;
    for record in csv.records() {
        let record = record?;
        match record.get(index) {
            Some(text) if !text.trim().is_empty() => texts.push(text.to_string()),
            _ => dropped += 1,
        }
    }
    debug!(kept = texts.len(), dropped, "dropped blank reviews");
    Ok(texts)
}

pub fn load_reviews(path: &Path, column: &str) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| {
        BootcampError::Dataset(format!("cannot open reviews file {}: {}", path.display(), e))
    })?;
    let texts = read_reviews(file, column).map_err(|e| match e {
        BootcampError::Dataset(msg) => BootcampError::Dataset(format!("{}: {}", path.display(), msg)),
        other => other,
    })?;
    info!(path = %path.display(), reviews = texts.len(), "loaded reviews");
    Ok(texts)
}
