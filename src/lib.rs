//! stager - generates a conventional commit message from staged files.
//!
//! # Overview
//!
//! stager reads the list of files staged in the git index, classifies each
//! path into a change type and scope, and prints a ready-to-use
//! `type(scope): summary` commit message with per-file bullet points.
//! Suitable for: `git commit -m "$(stager)"`.

pub mod classify;
pub mod error;
pub mod git;
pub mod message;

// Re-export commonly used types
pub use classify::ChangeType;
pub use error::{GitError, MessageError};
pub use message::CommitSummary;
