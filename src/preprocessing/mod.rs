//! Input cleanup and length checks ahead of scoring.

pub mod cleaner;

pub use cleaner::{Cleaner, CleanerError, InputLimits};
