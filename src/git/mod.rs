//! Git repository access.

pub mod staged;

pub use staged::{open_repo, staged_paths};
