//! Aggregation of per-path classifications into a single commit summary.

use tracing::debug;

use crate::classify::{ChangeType, change_type_of, label_of, scope_of};
use crate::error::MessageError;

/// Maximum number of bullet lines in the message body.
pub const MAX_BULLETS: usize = 8;

/// Largest staged set that still gets per-file bullets.
pub const MAX_BULLETED_FILES: usize = 10;

/// Resolved commit message parts aggregated across the whole staged set.
#[derive(Debug, Clone)]
pub struct CommitSummary {
    pub change_type: ChangeType,
    /// Shared scope, or None when the staged files span several scopes.
    pub scope: Option<String>,
    /// Bullet labels in staged order, truncated to [`MAX_BULLETS`].
    pub labels: Vec<String>,
    pub emit_bullets: bool,
}

impl CommitSummary {
    /// Aggregate a staged path list into commit message parts.
    ///
    /// Fix wins over everything, chore over the rest; otherwise the first
    /// type encountered in staged order is used. The scope is only kept
    /// when every path agrees on one.
    pub fn from_paths(paths: &[String]) -> Result<Self, MessageError> {
        if paths.is_empty() {
            return Err(MessageError::NothingStaged);
        }

        // Distinct types in first-occurrence order
        let mut types: Vec<ChangeType> = Vec::new();
        for path in paths {
            let ty = change_type_of(path);
            if !types.contains(&ty) {
                types.push(ty);
            }
        }

        let change_type = if types.contains(&ChangeType::Fix) {
            ChangeType::Fix
        } else if types.contains(&ChangeType::Chore) {
            ChangeType::Chore
        } else {
            types.first().copied().unwrap_or(ChangeType::Feat)
        };

        let mut scopes: Vec<&str> = Vec::new();
        for path in paths {
            let scope = scope_of(path);
            if !scopes.contains(&scope) {
                scopes.push(scope);
            }
        }
        let scope = (scopes.len() == 1).then(|| scopes[0].to_string());

        let labels: Vec<String> = paths.iter().map(|p| label_of(p)).take(MAX_BULLETS).collect();
        let emit_bullets = paths.len() > 1 && paths.len() <= MAX_BULLETED_FILES;

        debug!(
            "Aggregated {} path(s): type={}, scope={:?}, bullets={}",
            paths.len(),
            change_type,
            scope,
            emit_bullets
        );

        Ok(Self {
            change_type,
            scope,
            labels,
            emit_bullets,
        })
    }
}
