//! Dotted document paths to on-disk file paths.
//!
//! Docset catalogs address documents with dotted logical paths like
//! `language.types.array#casting`. The offline mirror stores one HTML
//! file per document, with the dots becoming directory separators.

/// Resolve a dotted document path into a relative file path (using `/`
/// separators) and a fragment.
///
/// The fragment is everything from the first `#` onward (inclusive), or
/// empty. Every `.` in the remaining base becomes a `/`, and `.html` is
/// appended unless already present. No other normalization happens:
/// empty segments or traversal sequences pass through unchanged, and a
/// base that already contains literal `/` separators is tolerated.
///
/// An empty or fragment-only input resolves to the `index` file at the
/// docset root.
pub fn resolve(doc_path: &str) -> (String, String) {
    let (base, fragment) = match doc_path.find('#') {
        Some(idx) => (&doc_path[..idx], doc_path[idx..].to_string()),
        None => (doc_path, String::new()),
    };

    let mut file = if base.is_empty() {
        "index".to_string()
    } else {
        base.replace('.', "/")
    };

    if !file.ends_with(".html") {
        file.push_str(".html");
    }

    (file, fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_become_separators() {
        assert_eq!(
            resolve("language.types.array"),
            ("language/types/array.html".to_string(), String::new())
        );
    }

    #[test]
    fn fragment_is_split_off() {
        let (file, fragment) = resolve("language.types.array#casting");
        assert_eq!(file, "language/types/array.html");
        assert_eq!(fragment, "#casting");
    }

    #[test]
    fn splits_at_first_hash_only() {
        let (file, fragment) = resolve("a.b#c#d");
        assert_eq!(file, "a/b.html");
        assert_eq!(fragment, "#c#d");
    }

    #[test]
    fn empty_path_resolves_to_index() {
        assert_eq!(resolve(""), ("index.html".to_string(), String::new()));
    }

    #[test]
    fn fragment_only_resolves_to_index() {
        let (file, fragment) = resolve("#top");
        assert_eq!(file, "index.html");
        assert_eq!(fragment, "#top");
    }

    #[test]
    fn single_segment() {
        assert_eq!(resolve("intro"), ("intro.html".to_string(), String::new()));
    }

    #[test]
    fn literal_slashes_are_tolerated() {
        assert_eq!(
            resolve("dir/page"),
            ("dir/page.html".to_string(), String::new())
        );
    }

    #[test]
    fn file_path_never_contains_hash() {
        for input in ["a#b", "#b", "a.b.c#d#e", "", "x"] {
            let (file, fragment) = resolve(input);
            assert!(!file.contains('#'), "{input}: {file}");
            assert!(
                fragment.is_empty() || fragment.starts_with('#'),
                "{input}: {fragment}"
            );
        }
    }
}
