//! Hyperlink rewriting for materialized documents.
//!
//! Remote content bundles reference other documents with a mix of dotted
//! logical paths, corpus-absolute paths and bare fragments. Once a
//! document is written to its nested location under `html/`, every one
//! of those references has to be rewritten so it resolves from the
//! document's on-disk directory.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="([^"]*)""#).unwrap());

/// Rewrite every `href="..."` value in `html` so it resolves from
/// `current_dir`, the materialized document's directory relative to the
/// docset html root (`""` for a document at the root). All other markup
/// is left untouched.
pub fn rewrite(html: &str, current_dir: &str) -> String {
    HREF_RE
        .replace_all(html, |caps: &Captures| {
            format!(r#"href="{}""#, rewrite_href(&caps[1], current_dir))
        })
        .into_owned()
}

fn rewrite_href(url: &str, current_dir: &str) -> String {
    // External, protocol-relative and mail links stay as they are, as
    // does anything that already points at an .html file.
    if url.contains("://")
        || url.starts_with("//")
        || url.starts_with("mailto:")
        || url.ends_with(".html")
    {
        return url.to_string();
    }

    if url.is_empty() || url == "." || url == "./" {
        return "index.html".to_string();
    }

    // Bare fragments address the docset root document.
    if let Some(fragment) = url.strip_prefix('#') {
        return format!("index.html#{fragment}");
    }

    // A leading slash means "relative to the docset root", not the
    // filesystem root.
    let is_absolute = url.starts_with('/');
    let url = url.strip_prefix('/').unwrap_or(url);
    let url = url.strip_suffix('/').unwrap_or(url);

    let (base, fragment) = match url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (url, None),
    };

    let mut base = base.to_string();
    if base.is_empty() || base == "." {
        base = "index".to_string();
    }

    let has_context = !current_dir.is_empty() && current_dir != ".";

    if base.contains('.') && !base.contains('/') {
        // A dotted logical path like "language.types.array".
        let target = base.replace('.', "/");
        base = if has_context {
            let source: Vec<&str> = current_dir.split('/').collect();
            let target: Vec<&str> = target.split('/').collect();
            relative_path_between(&source, &target)
        } else {
            target
        };
    } else if !is_absolute
        && !url.contains("..")
        && has_context
        && !base.contains('/')
    {
        // A plain token referencing a sibling document.
        base = format!("{current_dir}/{base}");
    }

    match fragment {
        Some(fragment) => format!("{base}.html#{fragment}"),
        None => format!("{base}.html"),
    }
}

/// Compute the minimal relative path from a source directory to a target,
/// both given as path components.
///
/// One `..` is emitted for every source component past the longest shared
/// prefix, followed by the target's remaining components. Two identical
/// sequences yield `"."`.
pub fn relative_path_between(source: &[&str], target: &[&str]) -> String {
    let common = source
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = String::new();
    for i in 0..source.len() - common {
        if i > 0 {
            result.push('/');
        }
        result.push_str("..");
    }
    for part in &target[common..] {
        if !result.is_empty() {
            result.push('/');
        }
        result.push_str(part);
    }

    if result.is_empty() {
        ".".to_string()
    } else {
        result
    }
}
