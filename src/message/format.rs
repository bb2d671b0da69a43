//! Rendering the aggregated summary as commit message text.

use crate::message::CommitSummary;

impl CommitSummary {
    /// Format the final commit message.
    ///
    /// Produces:
    /// ```text
    /// type(scope): update scope files
    ///
    /// - label
    /// - label
    /// ```
    ///
    /// The scope parenthetical is omitted entirely when the staged files
    /// span several scopes, in which case the summary says "staged" files.
    /// Bullets appear only when the summary says they should.
    pub fn render(&self) -> String {
        let scope_part = self
            .scope
            .as_ref()
            .map(|s| format!("({s})"))
            .unwrap_or_default();
        let target = self.scope.as_deref().unwrap_or("staged");
        let first_line = format!("{}{}: update {} files", self.change_type, scope_part, target);

        if !self.emit_bullets {
            return first_line;
        }

        let mut parts = vec![first_line, String::new()];
        parts.extend(self.labels.iter().map(|label| format!("- {label}")));
        parts.join("\n")
    }
}
