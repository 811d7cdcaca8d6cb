//! JSON and CSV files on disk.

use super::batch::BatchEntry;
use super::record::{Session, SessionRecord};
use super::summary::MoodSummary;
use crate::sass::SassQuoteResult;
use crate::sentiment::AnalysisResult;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ExportError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

#[derive(Serialize)]
struct ResultsFile<'a> {
    timestamp: DateTime<Utc>,
    sentiment_analysis: &'a AnalysisResult,
    sass_quote: &'a SassQuoteResult,
}

#[derive(Serialize)]
struct SessionFile<'a> {
    timestamp: DateTime<Utc>,
    session_id: String,
    summary: MoodSummary,
    session_results: &'a [SessionRecord],
}

const CSV_HEADER: [&str; 5] = [
    "text",
    "sentiment_score",
    "mood_category",
    "mood_emoji",
    "sass_quote",
];

#[derive(Serialize)]
struct CsvRow<'a> {
    text: &'a str,
    sentiment_score: f64,
    mood_category: &'a str,
    mood_emoji: &'a str,
    sass_quote: &'a str,
}

/// `<prefix>_<YYYYmmdd_HHMMSS>.<extension>` in local time.
pub fn default_file_name(prefix: &str, extension: &str, at: DateTime<Local>) -> String {
    format!("{}_{}.{}", prefix, at.format("%Y%m%d_%H%M%S"), extension)
}

fn resolve(path: Option<&Path>, prefix: &str, extension: &str) -> PathBuf {
    match path {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_file_name(prefix, extension, Local::now())),
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush().map_err(|e| ExportError::io(path, e))
}

/// Writes `{timestamp, sentiment_analysis, sass_quote}` and returns the path
/// actually used.
pub fn save_results_to_json(
    analysis: &AnalysisResult,
    quote: &SassQuoteResult,
    path: Option<&Path>,
) -> Result<PathBuf, ExportError> {
    let path = resolve(path, "sentiment_analysis", "json");
    write_json(
        &path,
        &ResultsFile {
            timestamp: Utc::now(),
            sentiment_analysis: analysis,
            sass_quote: quote,
        },
    )?;
    info!("Results saved to {}", path.display());
    Ok(path)
}

pub fn save_session_json(session: &Session, path: Option<&Path>) -> Result<PathBuf, ExportError> {
    let path = resolve(path, "sassbot_session", "json");
    write_json(
        &path,
        &SessionFile {
            timestamp: Utc::now(),
            session_id: session.id().to_string(),
            summary: MoodSummary::from_analyses(session.analyses()),
            session_results: session.records(),
        },
    )?;
    info!("Session saved to {}", path.display());
    Ok(path)
}

/// Generic decode; the caller decides what shape to expect.
pub fn load_results_from_json(path: &Path) -> Result<serde_json::Value, ExportError> {
    let file = File::open(path).map_err(|e| ExportError::io(path, e))?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    info!("Results loaded from {}", path.display());
    Ok(value)
}

/// Header plus one row per analyzed entry; failed entries are skipped.
pub fn export_to_csv(entries: &[BatchEntry], path: Option<&Path>) -> Result<PathBuf, ExportError> {
    let path = resolve(path, "sentiment_results", "csv");
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)?;
    writer.write_record(CSV_HEADER)?;

    for entry in entries {
        if let (Some(sentiment), Some(quote)) = (entry.sentiment(), entry.sass_quote()) {
            writer.serialize(CsvRow {
                text: &entry.text,
                sentiment_score: sentiment.combined_score(),
                mood_category: sentiment.mood().as_str(),
                mood_emoji: sentiment.emoji(),
                sass_quote: &quote.sass_quote,
            })?;
        }
    }

    writer.flush().map_err(|e| ExportError::io(&path, e))?;
    info!("Results exported to {}", path.display());
    Ok(path)
}
