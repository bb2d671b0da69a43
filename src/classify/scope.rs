//! Scope classification from the top-level path segment.

/// Map a staged path to its commit scope.
///
/// The scope is the path's top-level directory (the whole path when it has
/// no `/`), translated through a fixed table for conventionally named
/// directories. Anything else is used verbatim as the scope.
pub fn scope_of(path: &str) -> &str {
    let top = path.split('/').next().unwrap_or(path);
    match top {
        "app" => "app",
        "components" => "ui",
        "convex" => "convex",
        "lib" => "lib",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_directories() {
        assert_eq!(scope_of("app/page.tsx"), "app");
        assert_eq!(scope_of("components/Button.tsx"), "ui");
        assert_eq!(scope_of("convex/schema.ts"), "convex");
        assert_eq!(scope_of("lib/utils.ts"), "lib");
    }

    #[test]
    fn test_unmapped_directory_used_verbatim() {
        assert_eq!(scope_of("scripts/build.sh"), "scripts");
        assert_eq!(scope_of("docs/guide.md"), "docs");
    }

    #[test]
    fn test_root_level_file_is_its_own_scope() {
        assert_eq!(scope_of("package.json"), "package.json");
        assert_eq!(scope_of("README.md"), "README.md");
    }

    #[test]
    fn test_nested_path_uses_top_segment_only() {
        assert_eq!(scope_of("components/forms/Input.tsx"), "ui");
        assert_eq!(scope_of("src/deep/nested/file.rs"), "src");
    }
}
