use std::io::{self, Write};

use serde::Serialize;

/// One analyzed article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub title: String,
    pub url: String,
    pub publisher: Option<String>,
    pub published: String,
    /// Per-chunk summaries joined with `\n`. Empty if every chunk failed.
    pub summary: String,
    /// Mean of the per-chunk sentiment scores.
    pub sentiment: f64,
}

/// Append-only list of report rows, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    rows: Vec<ReportRow>,
}

const SEPARATOR_WIDTH: usize = 50;

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: ReportRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Writes every row as a four-line block followed by a line of fifty `=`.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let separator = "=".repeat(SEPARATOR_WIDTH);
        for row in &self.rows {
            writeln!(out, "Title: {}", row.title)?;
            writeln!(out, "URL: {}", row.url)?;
            writeln!(out, "Summary: {}", row.summary)?;
            // Debug keeps the fractional part on whole scores: `5.0`, not `5`.
            writeln!(out, "Sentiment Score: {:?}", row.sentiment)?;
            writeln!(out, "{separator}")?;
        }
        Ok(())
    }
}
