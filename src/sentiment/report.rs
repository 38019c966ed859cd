//! PDF report for a sentiment analysis run

use chrono::{DateTime, Local};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Point,
    Polygon, Rgb,
};
use std::f32::consts::PI;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

use super::pipeline::{Analysis, Sentiment, Thresholds};
use crate::console::display::wrap;
use crate::errors::{BootcampError, Result};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const FONT_SIZE_TITLE: f32 = 18.0;
const FONT_SIZE_HEADING: f32 = 14.0;
const FONT_SIZE_BODY: f32 = 10.0;
const LINE_HEIGHT: f32 = 5.0;
/// Characters per body line at 10pt Helvetica
const WRAP_COLUMNS: usize = 95;
const PIE_RADIUS: f32 = 28.0;

/// Facts about the run that are not in the analysis itself
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub source: String,
    pub column: String,
    pub generated_at: DateTime<Local>,
    pub workers: usize,
    pub chunk_size: usize,
    pub thresholds: Thresholds,
}

pub fn report_file_name(at: &DateTime<Local>) -> String {
    format!("sentiment_analysis_report-{}.pdf", at.format("%d-%m-%Y_%H-%M"))
}

/// Reduce text to what the built-in PDF fonts can show
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2018}' | '\u{2019}' | '\u{201B}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\u{00A3}' => out.push_str("GBP "),
            '\t' | '\n' | '\r' => out.push(' '),
            c if c.is_ascii() && !c.is_ascii_control() => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

fn sentiment_color(sentiment: Sentiment) -> Color {
    let (r, g, b) = match sentiment {
        Sentiment::Positive => (0.0, 0.5, 0.0),
        Sentiment::Negative => (1.0, 0.0, 0.0),
        Sentiment::Neutral => (0.0, 0.0, 1.0),
    };
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

/// Cursor over the document that starts new pages as text runs out
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl<'a> PageWriter<'a> {
    fn ensure(&mut self, height: f32) {
        if self.y - height < MARGIN {
            self.page_break();
        }
    }

    fn page_break(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN;
    }

    fn space(&mut self, mm: f32) {
        self.y -= mm;
    }

    fn heading(&mut self, text: &str, size: f32) {
        self.ensure(LINE_HEIGHT * 3.0);
        self.layer.set_fill_color(black());
        self.layer
            .use_text(sanitize(text), size, Mm(MARGIN), Mm(self.y), &self.bold);
        self.y -= LINE_HEIGHT * 1.6;
    }

    fn lines(&mut self, text: &str, italic: bool) {
        self.layer.set_fill_color(black());
        for line in wrap(&sanitize(text), WRAP_COLUMNS) {
            self.ensure(LINE_HEIGHT);
            let font = if italic { &self.italic } else { &self.regular };
            self.layer.use_text(line, FONT_SIZE_BODY, Mm(MARGIN), Mm(self.y), font);
            self.y -= LINE_HEIGHT;
        }
        self.y -= LINE_HEIGHT * 0.6;
    }

    fn paragraph(&mut self, text: &str) {
        self.lines(text, false);
    }

    fn quote(&mut self, text: &str) {
        self.lines(text, true);
    }

    /// Pie chart of label counts with a legend on its right
    fn pie(&mut self, slices: &[(Sentiment, usize)]) {
        let total: usize = slices.iter().map(|(_, n)| n).sum();
        if total == 0 {
            self.paragraph("No reviews to chart.");
            return;
        }

        let height = PIE_RADIUS * 2.0 + LINE_HEIGHT * 2.0;
        self.ensure(height);
        let cx = MARGIN + PIE_RADIUS + 10.0;
        let cy = self.y - PIE_RADIUS - LINE_HEIGHT;

        let mut start = PI / 2.0;
        for (sentiment, count) in slices {
            if *count == 0 {
                continue;
            }
            let sweep = 2.0 * PI * (*count as f32 / total as f32);
            // Roughly one vertex every 3 degrees keeps arcs smooth
            let steps = ((sweep / (PI / 60.0)).ceil() as usize).max(2);

            let mut ring = vec![(Point::new(Mm(cx), Mm(cy)), false)];
            for i in 0..=steps {
                let angle = start - sweep * (i as f32 / steps as f32);
                ring.push((
                    Point::new(Mm(cx + PIE_RADIUS * angle.cos()), Mm(cy + PIE_RADIUS * angle.sin())),
                    false,
                ));
            }

            self.layer.set_fill_color(sentiment_color(*sentiment));
            self.layer.add_polygon(Polygon {
                rings: vec![ring],
                mode: PaintMode::Fill,
                winding_order: WindingOrder::NonZero,
            });
            start -= sweep;
        }

        let legend_x = cx + PIE_RADIUS + 20.0;
        let mut legend_y = cy + LINE_HEIGHT * 2.0;
        for (sentiment, count) in slices {
            let square = vec![
                (Point::new(Mm(legend_x), Mm(legend_y)), false),
                (Point::new(Mm(legend_x + 4.0), Mm(legend_y)), false),
                (Point::new(Mm(legend_x + 4.0), Mm(legend_y + 4.0)), false),
                (Point::new(Mm(legend_x), Mm(legend_y + 4.0)), false),
            ];
            self.layer.set_fill_color(sentiment_color(*sentiment));
            self.layer.add_polygon(Polygon {
                rings: vec![square],
                mode: PaintMode::Fill,
                winding_order: WindingOrder::NonZero,
            });
            self.layer.set_fill_color(black());
            let pct = *count as f32 / total as f32 * 100.0;
            self.layer.use_text(
                format!("{}: {} ({:.1}%)", sentiment, count, pct),
                FONT_SIZE_BODY,
                Mm(legend_x + 7.0),
                Mm(legend_y + 0.5),
                &self.regular,
            );
            legend_y -= LINE_HEIGHT * 1.5;
        }

        self.y -= height + LINE_HEIGHT;
    }
}

/// Render the report to PDF bytes
pub fn generate_pdf(analysis: &Analysis, ctx: &ReportContext) -> Result<Vec<u8>> {
    let (doc, page1, layer1) = PdfDocument::new(
        "Product Review Sentiment Analysis Report",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );

    let mut writer = PageWriter {
        doc: &doc,
        layer: doc.get_page(page1).get_layer(layer1),
        y: PAGE_HEIGHT - MARGIN,
        regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
        italic: doc.add_builtin_font(BuiltinFont::HelveticaOblique)?,
    };
    let summary = &analysis.summary;

    writer.heading("Product Review Sentiment Analysis Report", FONT_SIZE_TITLE);
    writer.paragraph(&format!(
        "Generated {}.",
        ctx.generated_at.format("%a %b %d, %Y at %H:%M")
    ));
    writer.space(LINE_HEIGHT);

    writer.heading("Dataset Description", FONT_SIZE_HEADING);
    writer.paragraph(&format!(
        "This report analyses the sentiment of {} customer reviews read from {}. Only the '{}' column was used; every other column was ignored for this sentiment distribution analysis.",
        summary.total, ctx.source, ctx.column
    ));
    writer.paragraph("Rows whose review text was missing or blank were dropped before analysis, and row numbers below refer to the remaining reviews.");

    writer.heading("Preprocessing Steps", FONT_SIZE_HEADING);
    writer.paragraph("- Text cleaning: converted to lowercase, removed stop words and punctuation, and joined the remaining words with single spaces.");
    writer.paragraph(&format!(
        "- Performance: cleaning ran in parallel per review, and labeling split the reviews into chunks of {} across {} worker threads, flattening the results back in their original order.",
        ctx.chunk_size, ctx.workers
    ));

    writer.heading("Sentiment Analysis Results", FONT_SIZE_HEADING);
    writer.paragraph(&format!(
        "The sentiment analysis identified {} positive reviews, {} negative reviews, and {} neutral reviews.",
        summary.positive, summary.negative, summary.neutral
    ));
    writer.paragraph(&format!(
        "- Each cleaned review is scored with a polarity lexicon: the mean polarity of its opinion words, scaled by intensifiers and flipped by negations. Reviews scoring above {} are positive, below {} negative, and neutral otherwise.",
        ctx.thresholds.positive, ctx.thresholds.negative
    ));
    writer.paragraph("- Polarity is continuous, so the neutral band is a choice: widening or narrowing it shifts reviews between the categories.");
    writer.pie(&[
        (Sentiment::Positive, summary.positive),
        (Sentiment::Negative, summary.negative),
        (Sentiment::Neutral, summary.neutral),
    ]);

    writer.heading("Sample Reviews", FONT_SIZE_HEADING);
    for sentiment in [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral] {
        match analysis.first_with(sentiment) {
            Some(review) => {
                writer.paragraph(&format!("{} review sample:", sentiment));
                writer.quote(&review.raw);
            }
            None => writer.paragraph(&format!("No {} reviews were found.", sentiment.to_string().to_lowercase())),
        }
    }

    if let Some(pair) = &analysis.similarity {
        writer.page_break();
        writer.heading("Review Similarity Example", FONT_SIZE_HEADING);
        writer.paragraph(&format!("Review 1 (row {}):", pair.first_row));
        writer.quote(&pair.first);
        writer.paragraph(&format!("Review 2 (row {}):", pair.second_row));
        writer.quote(&pair.second);
        writer.paragraph(&format!(
            "The similarity score between the selected reviews is: {:.2}.",
            pair.score
        ));
        writer.paragraph("- Similarity is the cosine between the word-count vectors of the raw reviews, ignoring stop words. It rewards shared vocabulary, not shared meaning: synonyms, typos and slang all lower the score.");
    }

    writer.heading("Model Strengths", FONT_SIZE_HEADING);
    writer.paragraph("- Identifies overall sentiment quickly: positive, negative and neutral labels give a fast first pass over free text, the hardest column of most datasets to analyse.");
    writer.paragraph("- Transparent: every score traces back to individual lexicon words, so misclassified reviews can be explained and the lexicon extended.");

    writer.heading("Model Limitations", FONT_SIZE_HEADING);
    writer.paragraph("- Sarcasm, humour and mixed opinions are beyond a word-level lexicon. Cleaning removes negations such as 'not', which can invert the meaning of a review.");
    writer.paragraph("- Accuracy should be checked against a manually labelled sample, measuring precision, recall and F1 before the labels inform decisions.");

    drop(writer);

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)?;
    buf.into_inner()
        .map_err(|e| BootcampError::Report(format!("Failed to finalize PDF: {}", e)))
}

/// Render and write the report into `dir`
pub fn write_report(analysis: &Analysis, ctx: &ReportContext, dir: &Path) -> Result<PathBuf> {
    let bytes = generate_pdf(analysis, ctx)?;
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let path = dir.join(report_file_name(&ctx.generated_at));
    fs::write(&path, bytes)?;
    info!(path = %path.display(), "report written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::lexicon::Lexicon;
    use chrono::TimeZone;

    fn context() -> ReportContext {
        ReportContext {
            source: "reviews.csv".to_string(),
            column: "reviews.text".to_string(),
            generated_at: Local.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap(),
            workers: 4,
            chunk_size: 2,
            thresholds: Thresholds::default(),
        }
    }

    fn analysis() -> Analysis {
        let raw = vec![
            "Great tablet, my kids love it!".to_string(),
            "Terrible battery. Returned it.".to_string(),
            "It is a tablet \u{2013} nothing more".to_string(),
        ];
        Analysis::run(raw, &Lexicon::builtin(), &Thresholds::default(), [10, 20])
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(
            report_file_name(&context().generated_at),
            "sentiment_analysis_report-05-03-2024_14-07.pdf"
        );
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("it\u{2019}s \u{201C}fine\u{201D}\u{2026}"), "it's \"fine\"...");
        assert_eq!(sanitize("caf\u{e9}\nnext"), "caf? next");
    }

    #[test]
    fn test_pdf_generation() {
        let pdf = generate_pdf(&analysis(), &context()).unwrap();
        assert!(!pdf.is_empty());
        assert_eq!(&pdf[0..4], b"%PDF");
    }

    #[test]
    fn test_pdf_with_empty_analysis() {
        let empty = Analysis::run(Vec::new(), &Lexicon::builtin(), &Thresholds::default(), [10, 20]);
        let pdf = generate_pdf(&empty, &context()).unwrap();
        assert_eq!(&pdf[0..4], b"%PDF");
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(&analysis(), &context(), dir.path()).unwrap();
        assert!(path.ends_with("sentiment_analysis_report-05-03-2024_14-07.pdf"));
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
