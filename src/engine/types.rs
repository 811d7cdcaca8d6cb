//! Shared structs.

use crate::sass::SassQuoteResult;
use crate::sentiment::AnalysisResult;
use crate::session::Session;

/// One analysis and the quote written for it.
#[derive(Debug, Clone)]
pub struct Turn {
    pub analysis: AnalysisResult,
    pub quote: SassQuoteResult,
}

#[derive(Debug, Clone, Default)]
pub struct EngineState {
    pub session: Session,
    pub last: Option<Turn>,
}
