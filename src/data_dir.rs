use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// On-disk layout for installed documentation sets.
///
/// Every docset lives in its own directory named by slug:
///
/// ```text
/// <root>/<slug>/meta.json   release/version/freshness token
/// <root>/<slug>/index.json  verbatim remote catalog
/// <root>/<slug>/db.json     verbatim remote content bundle
/// <root>/<slug>/html/...    materialized offline mirror
/// ```
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Resolve the data directory from, in order of priority:
    /// 1. An explicit path (from --data-dir)
    /// 2. The DOCDEX_DATA_DIR environment variable
    /// 3. The XDG data directory (~/.local/share/docdex/)
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let root = if let Some(path) = explicit {
            path.to_path_buf()
        } else if let Ok(val) = std::env::var("DOCDEX_DATA_DIR") {
            PathBuf::from(val)
        } else {
            xdg::BaseDirectories::with_prefix("docdex")
                .get_data_home()
                .ok_or_else(|| {
                    Error::Config(
                        "could not determine XDG data home directory".into(),
                    )
                })?
        };

        std::fs::create_dir_all(&root)
            .map_err(|_| Error::DataDir(root.clone()))?;

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn docset_dir(&self, slug: &str) -> PathBuf {
        self.root.join(slug)
    }

    pub fn meta_path(&self, slug: &str) -> PathBuf {
        self.docset_dir(slug).join("meta.json")
    }

    /// Older installs recorded the freshness token as a bare decimal
    /// integer in a plain-text `mtime` file. Read-only fallback.
    pub fn legacy_mtime_path(&self, slug: &str) -> PathBuf {
        self.docset_dir(slug).join("mtime")
    }

    pub fn index_path(&self, slug: &str) -> PathBuf {
        self.docset_dir(slug).join("index.json")
    }

    pub fn db_path(&self, slug: &str) -> PathBuf {
        self.docset_dir(slug).join("db.json")
    }

    pub fn html_dir(&self, slug: &str) -> PathBuf {
        self.docset_dir(slug).join("html")
    }
}
