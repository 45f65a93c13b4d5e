//! Log classification for podlens
//!
//! This crate turns raw log text into categorized, counted evidence and
//! provides the looser per-line colorization used by the log view.

mod classifier;
mod tone;

pub use classifier::LogClassifier;
pub use tone::{LineTone, display_lines};

// Re-export types used in our public API
pub use podlens_types::{LogAnalysis, LogCategory, LogVerdict};
