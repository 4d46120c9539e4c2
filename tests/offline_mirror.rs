use std::collections::HashMap;
use std::path::Path;

use docdex::catalog::{DocsetMeta, DocumentEntry};
use docdex::{CacheStore, DataDir};
use serde_json::json;

fn store(root: &Path) -> Result<CacheStore, Box<dyn std::error::Error>> {
    Ok(CacheStore::new(DataDir::resolve(Some(root))?))
}

fn setup_docset(
    cache: &CacheStore,
    slug: &str,
    mtime: i64,
    entries: &[(&str, &str, &str)],
    content: &HashMap<String, String>,
) -> Result<(), Box<dyn std::error::Error>> {
    cache.ensure(slug)?;

    let index = json!({
        "entries": entries
            .iter()
            .map(|(name, path, kind)| {
                json!({ "name": name, "path": path, "type": kind })
            })
            .collect::<Vec<_>>(),
    });
    cache.save_index(slug, &index.to_string())?;
    cache.save_db(slug, &serde_json::to_string(content)?)?;
    cache.save_meta(
        slug,
        &DocsetMeta {
            release: "1.0".into(),
            version: "1".into(),
            mtime,
        },
    )?;
    cache.materialize(slug, content)?;
    Ok(())
}

fn php_content() -> HashMap<String, String> {
    HashMap::from([
        (
            "index".to_string(),
            concat!(
                r#"<a href="language.types.array">arrays</a>"#,
                r#"<a href="https://php.net">upstream</a>"#,
                r##"<a href="#install">install</a>"##,
            )
            .to_string(),
        ),
        (
            "language.types.array".to_string(),
            concat!(
                r#"<a href="language.types.object">objects</a>"#,
                r#"<a href="/function.sort#refsect1">sort</a>"#,
                r#"<a href="./">home</a>"#,
            )
            .to_string(),
        ),
        (
            "language.types.object".to_string(),
            r#"<a href="function.sort">sort</a>"#.to_string(),
        ),
        ("function.sort".to_string(), "<p>sort</p>".to_string()),
    ])
}

#[test]
fn materialize_rewrites_nested_links(
) -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    let cache = store(tmp.path())?;
    setup_docset(&cache, "php", 100, &[], &php_content())?;

    let root = cache.dirs().html_dir("php");

    let index = std::fs::read_to_string(root.join("index.html"))?;
    assert!(index.contains(r#"href="language/types/array.html""#));
    // External URLs and bare fragments pass through untouched; the
    // fragment gains the index target.
    assert!(index.contains(r#"href="https://php.net""#));
    assert!(index.contains(r#"href="index.html#install""#));

    let array =
        std::fs::read_to_string(root.join("language/types/array.html"))?;
    // Sibling in the same directory.
    assert!(array.contains(r#"href="object.html""#));
    // Corpus-absolute path resolved relative to the file's directory,
    // with the fragment kept.
    assert!(array.contains(r#"href="../../function/sort.html#refsect1""#));
    assert!(array.contains(r#"href="index.html""#));

    // Every rewritten link resolves to a file that exists on disk.
    assert!(root.join("language/types/object.html").exists());
    assert!(root.join("function/sort.html").exists());
    Ok(())
}

#[test]
fn materialize_is_deterministic() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    let cache = store(tmp.path())?;
    let content = php_content();

    setup_docset(&cache, "php", 100, &[], &content)?;
    let root = cache.dirs().html_dir("php");
    let first = std::fs::read_to_string(root.join("index.html"))?;

    cache.materialize("php", &content)?;
    let second = std::fs::read_to_string(root.join("index.html"))?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn staleness_across_reinstall() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    let cache = store(tmp.path())?;

    assert!(cache.is_stale("php", 100));

    setup_docset(&cache, "php", 100, &[], &HashMap::new())?;
    assert!(!cache.is_stale("php", 100));
    assert!(cache.is_stale("php", 101));

    // A legacy install carries only the plain-text mtime file.
    cache.ensure("ruby")?;
    std::fs::write(cache.dirs().legacy_mtime_path("ruby"), "50\n")?;
    assert!(!cache.is_stale("ruby", 50));
    assert!(cache.is_stale("ruby", 51));

    cache.remove("php")?;
    assert!(cache.is_stale("php", 100));
    Ok(())
}

#[test]
fn search_spans_installed_docsets(
) -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    let cache = store(tmp.path())?;

    setup_docset(
        &cache,
        "css",
        1,
        &[
            ("flex-flow", "flex-flow", "Property"),
            ("color", "color", "Property"),
        ],
        &HashMap::new(),
    )?;
    setup_docset(
        &cache,
        "javascript",
        1,
        &[("Array.prototype.flat", "global_objects.array.flat", "Method")],
        &HashMap::new(),
    )?;

    let hits = docdex::search::search_all(&cache, "fl")?;
    let found: Vec<(&str, &str)> = hits
        .iter()
        .map(|h| (h.slug.as_str(), h.entry.name.as_str()))
        .collect();
    assert!(found.contains(&("css", "flex-flow")));
    assert!(found.contains(&("javascript", "Array.prototype.flat")));
    assert!(!found.iter().any(|(_, name)| *name == "color"));

    // A docset with a corrupted catalog is skipped, not fatal.
    cache.ensure("broken")?;
    cache.save_index("broken", "{not json")?;
    let hits = docdex::search::search_all(&cache, "fl")?;
    assert_eq!(hits.len(), 2);
    Ok(())
}

#[test]
fn entry_paths_resolve_to_materialized_files(
) -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    let cache = store(tmp.path())?;
    setup_docset(
        &cache,
        "php",
        100,
        &[(
            "sort",
            "function.sort#refsect1-function.sort-description",
            "Function",
        )],
        &php_content(),
    )?;

    let index = cache.load_index("php")?;
    let entry: &DocumentEntry = &index.entries[0];
    let (file, fragment) = cache.document_path("php", &entry.path);
    assert!(file.exists());
    assert_eq!(fragment, "#refsect1-function.sort-description");
    Ok(())
}
