//! Entry name utilities.

/// Base name of the barrel file itself.
const INDEX: &str = "index";

/// Strip the extension from an entry name.
///
/// The extension starts at the final `.`. Leading dots belong to the name,
/// so dotfiles without a further dot are returned unchanged.
///
/// ```
/// use barrel_core::strip_extension;
///
/// assert_eq!(strip_extension("button.tsx"), "button");
/// assert_eq!(strip_extension("api.client.ts"), "api.client");
/// assert_eq!(strip_extension(".env"), ".env");
/// ```
pub fn strip_extension(name: &str) -> &str {
    let leading = name.len() - name.trim_start_matches('.').len();
    match name[leading..].rfind('.') {
        Some(dot) => &name[..leading + dot],
        None => name,
    }
}

/// Whether an entry is an index file (`index`, `index.ts`, `index.js`, ...).
///
/// The comparison is case-sensitive and only looks at the name with its
/// final extension removed, so `index.d.ts` is not an index file.
pub fn is_index(name: &str) -> bool {
    strip_extension(name) == INDEX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("a.ts"), "a");
        assert_eq!(strip_extension("a.b.ts"), "a.b");
        assert_eq!(strip_extension("README"), "README");
        assert_eq!(strip_extension("foo."), "foo");
        assert_eq!(strip_extension(""), "");
    }

    #[test]
    fn test_strip_extension_leading_dots() {
        assert_eq!(strip_extension(".env"), ".env");
        assert_eq!(strip_extension("..cfg"), "..cfg");
        assert_eq!(strip_extension(".eslintrc.js"), ".eslintrc");
        assert_eq!(strip_extension("..foo.ts"), "..foo");
    }

    #[test]
    fn test_is_index() {
        assert!(is_index("index"));
        assert!(is_index("index.ts"));
        assert!(is_index("index.js"));
        assert!(!is_index("Index.ts"));
        assert!(!is_index("index.d.ts"));
        assert!(!is_index("reindex.ts"));
        assert!(!is_index(".index"));
    }
}
