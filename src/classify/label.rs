//! Short display labels for bullet lines.

use std::sync::LazyLock;

use regex_lite::Regex;

static EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(tsx?|jsx?|css|json|md)$").unwrap());

/// Derive a short bullet label from a staged path.
///
/// Strips a known trailing extension and takes the base name. Generic
/// framework file names ("page", "layout") are replaced by their parent
/// directory path so the bullet surfaces the route instead; for a
/// root-level file that parent is the empty string.
pub fn label_of(path: &str) -> String {
    let stripped = EXTENSION_RE.replace(path, "");
    let base = stripped.rsplit('/').next().unwrap_or(&stripped);

    if base == "page" || base == "layout" {
        return match path.rfind('/') {
            Some(idx) => path[..idx].to_string(),
            None => String::new(),
        };
    }

    base.to_string()
}
