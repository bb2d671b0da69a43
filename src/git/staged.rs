//! Staged-file enumeration from the git index.

use git2::{ErrorCode, Repository, Tree};
use tracing::debug;

use crate::error::GitError;

/// Open the repository at the current working directory.
pub fn open_repo() -> Result<Repository, GitError> {
    Repository::open(".").map_err(GitError::OpenRepository)
}

/// Resolve the HEAD tree, distinguishing empty-repo errors from real failures.
///
/// Returns `Ok(None)` for repos with no commits (unborn branch / not found),
/// `Ok(Some(tree))` for repos with a valid HEAD, or `Err(GitError::ResolveHead)`
/// for real errors (corrupt HEAD, permission issues, missing objects).
fn resolve_head_tree(repo: &Repository) -> Result<Option<Tree<'_>>, GitError> {
    let head_ref = match repo.head() {
        Ok(r) => r,
        Err(e)
            if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound =>
        {
            return Ok(None);
        }
        Err(e) => return Err(GitError::ResolveHead(e)),
    };

    let tree = head_ref.peel_to_tree().map_err(GitError::ResolveHead)?;
    Ok(Some(tree))
}

/// List the paths staged in the index, in the order git reports them.
///
/// Equivalent to `git diff --cached --name-only`: diffs HEAD against the
/// index (or an empty tree for a repo with no commits yet). Staged
/// deletions are included; renames report the new path.
pub fn staged_paths(repo: &Repository) -> Result<Vec<String>, GitError> {
    let head_tree = resolve_head_tree(repo)?;

    let diff = repo
        .diff_tree_to_index(head_tree.as_ref(), None, None)
        .map_err(GitError::DiffFailed)?;

    let mut paths = Vec::new();
    for delta in diff.deltas() {
        let file = delta.new_file().path().or_else(|| delta.old_file().path());
        if let Some(path) = file {
            let path = path.to_string_lossy().into_owned();
            if !path.is_empty() {
                paths.push(path);
            }
        }
    }

    debug!("Found {} staged file(s)", paths.len());
    Ok(paths)
}
