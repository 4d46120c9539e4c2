use serde::{Deserialize, Serialize};

/// One logical document within a docset's catalog.
///
/// `path` is dotted (e.g. `language.types.array`) and may carry a
/// `#fragment` suffix. Entries are immutable once read from the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl DocumentEntry {
    /// Returns a formatted string for display, e.g. `Array.sort (Method)`.
    pub fn display(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}

/// A docset descriptor from the global remote catalog.
///
/// `slug` is the unique install key and the on-disk directory name.
/// `mtime` is an opaque freshness token supplied by the remote source;
/// it is only ever compared, never interpreted as wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocsetDescriptor {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub release: String,
    #[serde(default)]
    pub mtime: i64,
    #[serde(default)]
    pub description: String,
}

impl DocsetDescriptor {
    /// Returns a formatted name for display, e.g. `Python 3.12`.
    pub fn display_name(&self) -> String {
        if self.version.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.version)
        }
    }
}

/// Verbatim per-docset catalog, the shape of `index.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocsetIndex {
    pub entries: Vec<DocumentEntry>,
}

/// Per-install metadata, the shape of `meta.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocsetMeta {
    pub release: String,
    pub version: String,
    pub mtime: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_type_field_rename() {
        let entry: DocumentEntry = serde_json::from_str(
            r#"{"name":"Array.sort","path":"array.sort","type":"Method"}"#,
        )
        .unwrap();
        assert_eq!(entry.kind, "Method");
        assert_eq!(entry.display(), "Array.sort (Method)");

        let round = serde_json::to_string(&entry).unwrap();
        assert!(round.contains(r#""type":"Method""#));
    }

    #[test]
    fn descriptor_tolerates_missing_fields() {
        let docset: DocsetDescriptor =
            serde_json::from_str(r#"{"slug":"css","name":"CSS"}"#).unwrap();
        assert_eq!(docset.slug, "css");
        assert_eq!(docset.version, "");
        assert_eq!(docset.mtime, 0);
        assert_eq!(docset.display_name(), "CSS");
    }

    #[test]
    fn display_name_includes_version() {
        let docset = DocsetDescriptor {
            slug: "python~3.12".into(),
            name: "Python".into(),
            version: "3.12".into(),
            release: "3.12.1".into(),
            mtime: 1700000000,
            description: String::new(),
        };
        assert_eq!(docset.display_name(), "Python 3.12");
    }

    #[test]
    fn meta_roundtrip() {
        let meta = DocsetMeta {
            release: "3.12.1".into(),
            version: "3.12".into(),
            mtime: 1700000000,
        };
        let raw = serde_json::to_string(&meta).unwrap();
        let back: DocsetMeta = serde_json::from_str(&raw).unwrap();
        assert_eq!(meta, back);
    }
}
