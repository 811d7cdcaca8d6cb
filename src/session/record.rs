//! Everything analyzed since the program started.

use crate::sass::SassQuoteResult;
use crate::sentiment::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct SessionRecord {
    pub text: String,
    pub sentiment: AnalysisResult,
    pub sass_quote: SassQuoteResult,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    session_id: Uuid,
    started_at: DateTime<Utc>,
    records: Vec<SessionRecord>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            records: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.session_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn record(&mut self, analysis: &AnalysisResult, quote: &SassQuoteResult) {
        self.records.push(SessionRecord {
            text: analysis.text().to_string(),
            sentiment: analysis.clone(),
            sass_quote: quote.clone(),
            timestamp: Utc::now(),
        });
    }

    pub fn analyses(&self) -> impl Iterator<Item = &AnalysisResult> {
        self.records.iter().map(|r| &r.sentiment)
    }
}
