//! Calculation receipts rendered as text, HTML or SVG

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::console::display::{center, format_thousands, rule};
use crate::errors::{BootcampError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// SVG drawing
    Image,
    Webpage,
    Text,
}

impl ExportFormat {
    pub const CHOICES: [&'static str; 3] = ["image", "webpage", "text"];

    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim().to_lowercase().as_str() {
            "image" => Some(ExportFormat::Image),
            "webpage" => Some(ExportFormat::Webpage),
            "text" => Some(ExportFormat::Text),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Image => "image",
            ExportFormat::Webpage => "webpage",
            ExportFormat::Text => "text",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Image => "receipt.svg",
            ExportFormat::Webpage => "receipt.html",
            ExportFormat::Text => "receipt.txt",
        }
    }
}

/// How a row value is printed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowValue {
    /// Currency amount, 2 dp with separators
    Money(f64),
    /// Percentage, 1 dp
    Percent(f64),
    /// Whole count with separators
    Count(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptRow {
    pub label: String,
    pub value: RowValue,
}

impl ReceiptRow {
    pub fn new(label: &str, value: RowValue) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }

    /// Label with its unit, e.g. "Deposit (£)"
    pub fn display_label(&self, currency: &str) -> String {
        match self.value {
            RowValue::Money(_) => format!("{} ({})", self.label, currency),
            RowValue::Percent(_) => format!("{} (%)", self.label),
            RowValue::Count(_) => self.label.clone(),
        }
    }

    pub fn display_value(&self) -> String {
        match self.value {
            RowValue::Money(v) => format_thousands(v, 2),
            RowValue::Percent(v) => format_thousands(v, 1),
            RowValue::Count(v) => format_thousands(v as f64, 0),
        }
    }
}

/// Header bar contents: brand, heading and a formatted timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptHeader {
    pub brand: String,
    pub heading: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub header: ReceiptHeader,
    pub title: String,
    pub currency: String,
    pub inputs: Vec<ReceiptRow>,
    /// Calculated values, emphasised when rendered
    pub results: Vec<ReceiptRow>,
    pub caption: String,
}

pub const CAPTION: &str = "Thank you for using our services";

/// Escape the five XML special characters
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl Receipt {
    fn labelled_rows(&self) -> impl Iterator<Item = (String, String, bool)> + '_ {
        self.inputs
            .iter()
            .map(|r| (r, false))
            .chain(self.results.iter().map(|r| (r, true)))
            .map(|(r, emphasis)| (r.display_label(&self.currency), r.display_value(), emphasis))
    }

    /// Header bar line: brand left, heading centred, timestamp right
    pub fn header_line(&self, width: usize) -> String {
        let side = width / 4;
        let middle = width.saturating_sub(side * 2);
        format!(
            "{:<side$}{}{:>side$}",
            self.header.brand,
            center(&self.header.heading, middle, ' '),
            self.header.timestamp,
            side = side
        )
    }

    /// Boxed table rows, `width` columns wide
    pub fn table_lines(&self, width: usize) -> Vec<String> {
        let inner = width.saturating_sub(7);
        let label_width = inner * 2 / 3;
        let value_width = inner - label_width;
        let border = format!("+{}+{}+", "-".repeat(label_width + 2), "-".repeat(value_width + 2));

        let mut lines = vec![center(&self.title, width, ' '), border.clone()];
        for (label, value, emphasis) in self.labelled_rows() {
            let label = if emphasis { format!("* {}", label) } else { label };
            lines.push(format!(
                "| {:<lw$} | {:>vw$} |",
                label,
                value,
                lw = label_width,
                vw = value_width
            ));
            lines.push(border.clone());
        }
        lines.push(center(&self.caption, width, ' '));
        lines
    }

    pub fn to_text(&self, width: usize) -> String {
        let mut lines = vec![rule(width, '='), self.header_line(width), rule(width, '='), String::new()];
        lines.extend(self.table_lines(width));
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    pub fn to_html(&self) -> String {
        let mut rows = String::new();
        for (label, value, emphasis) in self.labelled_rows() {
            let class = if emphasis { " class=\"result\"" } else { "" };
            rows.push_str(&format!(
                "      <tr{}><td class=\"label\">{}</td><td class=\"value\">{}</td></tr>\n",
                class,
                escape(&label),
                escape(&value)
            ));
        }

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <title>{brand}</title>
  <style>
    body {{ background: #272822; color: #f8f8f2; font-family: monospace; }}
    header {{ display: flex; justify-content: space-between; background: #fff; color: #c00; padding: 0.5em 1em; }}
    table {{ margin: 2em auto; border-collapse: collapse; min-width: 60%; }}
    caption {{ caption-side: top; font-style: italic; padding: 0.5em; }}
    td {{ border: 1px solid #75715e; padding: 0.5em 1em; }}
    td.label {{ color: #66d9ef; }}
    td.value {{ color: #ae81ff; font-weight: bold; text-align: right; }}
    tr.result td {{ text-decoration: underline; }}
    p.caption {{ text-align: center; font-style: italic; }}
  </style>
</head>
<body>
  <header><em>{brand}</em><strong>{heading}</strong><span>{timestamp}</span></header>
  <table>
    <caption>{title}</caption>
    <tbody>
{rows}    </tbody>
  </table>
  <p class="caption">{caption}</p>
</body>
</html>
"#,
            brand = escape(&self.header.brand),
            heading = escape(&self.header.heading),
            timestamp = escape(&self.header.timestamp),
            title = escape(&self.title),
            rows = rows,
            caption = escape(&self.caption),
        )
    }

    pub fn to_svg(&self) -> String {
        const WIDTH: usize = 800;
        const ROW: usize = 36;
        let rows: Vec<(String, String, bool)> = self.labelled_rows().collect();
        let height = 200 + rows.len() * ROW;

        let mut body = String::new();
        body.push_str(&format!(
            "  <rect x=\"0\" y=\"0\" width=\"{w}\" height=\"40\" fill=\"#ffffff\"/>\n\
             \x20 <text x=\"16\" y=\"26\" fill=\"#cc0000\" font-style=\"italic\">{}</text>\n\
             \x20 <text x=\"{c}\" y=\"26\" fill=\"#cc0000\" font-weight=\"bold\" text-anchor=\"middle\">{}</text>\n\
             \x20 <text x=\"{r}\" y=\"26\" fill=\"#cc0000\" text-anchor=\"end\">{}</text>\n",
            escape(&self.header.brand),
            escape(&self.header.heading),
            escape(&self.header.timestamp),
            w = WIDTH,
            c = WIDTH / 2,
            r = WIDTH - 16
        ));
        body.push_str(&format!(
            "  <text x=\"{}\" y=\"90\" fill=\"#f8f8f2\" font-style=\"italic\" text-anchor=\"middle\">{}</text>\n",
            WIDTH / 2,
            escape(&self.title)
        ));

        for (i, (label, value, emphasis)) in rows.iter().enumerate() {
            let y = 110 + i * ROW;
            let decoration = if *emphasis { " text-decoration=\"underline\"" } else { "" };
            body.push_str(&format!(
                "  <rect x=\"80\" y=\"{y}\" width=\"640\" height=\"{h}\" fill=\"none\" stroke=\"#75715e\"/>\n\
                 \x20 <text x=\"96\" y=\"{ty}\" fill=\"#66d9ef\"{d}>{}</text>\n\
                 \x20 <text x=\"704\" y=\"{ty}\" fill=\"#ae81ff\" font-weight=\"bold\" text-anchor=\"end\"{d}>{}</text>\n",
                escape(label),
                escape(value),
                y = y,
                h = ROW,
                ty = y + 23,
                d = decoration
            ));
        }
        body.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" fill=\"#f8f8f2\" font-style=\"italic\" text-anchor=\"middle\">{}</text>\n",
            WIDTH / 2,
            130 + rows.len() * ROW,
            escape(&self.caption)
        ));

        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"monospace\" font-size=\"15\">\n\
             \x20 <title>{}</title>\n\
             \x20 <rect width=\"100%\" height=\"100%\" fill=\"#272822\"/>\n\
             {}</svg>\n",
            escape(&self.header.brand),
            body,
            w = WIDTH,
            h = height
        )
    }

    pub fn render(&self, format: ExportFormat, width: usize) -> String {
        match format {
            ExportFormat::Image => self.to_svg(),
            ExportFormat::Webpage => self.to_html(),
            ExportFormat::Text => self.to_text(width),
        }
    }

    /// Write the receipt into `dir`, returning the absolute file path
    pub fn export(&self, format: ExportFormat, dir: &Path, width: usize) -> Result<PathBuf> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        let path = dir.join(format.file_name());
        fs::write(&path, self.render(format, width))?;

        let path = path.canonicalize().map_err(|e| {
            BootcampError::Report(format!("cannot resolve {}: {}", path.display(), e))
        })?;
        info!(path = %path.display(), format = format.name(), "receipt exported");
        Ok(path)
    }
}
