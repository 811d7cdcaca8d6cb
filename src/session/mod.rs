//! Batch runs, mood statistics and file exports over many analyses.

pub mod batch;
pub mod export;
pub mod record;
pub mod summary;

pub use batch::{batch_process, BatchEntry, BatchOutcome};
pub use export::{
    default_file_name, export_to_csv, load_results_from_json, save_results_to_json,
    save_session_json, ExportError,
};
pub use record::{Session, SessionRecord};
pub use summary::MoodSummary;
