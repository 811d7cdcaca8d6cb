//! State bookkeeping between turns.

use super::types::{EngineState, Turn};
use tracing::debug;

pub fn update_state(state: &mut EngineState, turn: &Turn) {
    state.session.record(&turn.analysis, &turn.quote);
    state.last = Some(turn.clone());
    debug!(records = state.session.len(), "Session updated");
}
