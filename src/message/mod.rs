//! Aggregation and formatting of the final commit message.

pub mod aggregate;
pub mod format;

pub use aggregate::{CommitSummary, MAX_BULLETED_FILES, MAX_BULLETS};
