//! Error types for stager modules using thiserror.

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to resolve HEAD: {0}")]
    ResolveHead(#[source] git2::Error),

    #[error("Failed to diff the index: {0}")]
    DiffFailed(#[source] git2::Error),
}

/// Errors from message generation.
#[derive(Error, Debug)]
pub enum MessageError {
    #[error("No staged files. Stage some files with git add.")]
    NothingStaged,
}
