//! On-disk store for installed docsets.
//!
//! The store is the only owner of a docset directory's contents: the
//! metadata record, the verbatim remote blobs (`index.json`, `db.json`)
//! and the materialized `html/` tree. There is no locking; two
//! concurrent materializations of the same slug race with last-writer-wins
//! semantics, which is acceptable because every file's content depends
//! only on its own entry in the content map.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::catalog::{DocsetIndex, DocsetMeta};
use crate::data_dir::DataDir;
use crate::error::{Error, Result};
use crate::{links, resolve};

#[derive(Debug, Clone)]
pub struct CacheStore {
    dirs: DataDir,
}

impl CacheStore {
    pub fn new(dirs: DataDir) -> Self {
        Self { dirs }
    }

    pub fn dirs(&self) -> &DataDir {
        &self.dirs
    }

    /// Create the docset directory. Idempotent.
    pub fn ensure(&self, slug: &str) -> Result<()> {
        fs::create_dir_all(self.dirs.docset_dir(slug))?;
        Ok(())
    }

    /// Directory-presence check only; internal consistency is not
    /// validated.
    pub fn exists(&self, slug: &str) -> bool {
        self.dirs.docset_dir(slug).exists()
    }

    /// Slugs of all installed docsets, sorted by name.
    pub fn installed_slugs(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(self.dirs.root()) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let mut slugs = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                slugs.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        slugs.sort();
        Ok(slugs)
    }

    /// Delete the whole docset directory. No tombstones are kept.
    pub fn remove(&self, slug: &str) -> Result<()> {
        if !self.exists(slug) {
            return Err(Error::NotInstalled { slug: slug.into() });
        }
        fs::remove_dir_all(self.dirs.docset_dir(slug))?;
        Ok(())
    }

    // -- Metadata / freshness --

    pub fn save_meta(&self, slug: &str, meta: &DocsetMeta) -> Result<()> {
        let raw = serde_json::to_string(meta)?;
        fs::write(self.dirs.meta_path(slug), raw)?;
        Ok(())
    }

    pub fn load_meta(&self, slug: &str) -> Result<DocsetMeta> {
        let raw = fs::read_to_string(self.dirs.meta_path(slug))?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// The stored freshness token, if one can be read. Falls back to the
    /// legacy plain-text `mtime` file written by older installs.
    pub fn freshness(&self, slug: &str) -> Option<i64> {
        if let Ok(meta) = self.load_meta(slug) {
            return Some(meta.mtime);
        }
        let raw =
            fs::read_to_string(self.dirs.legacy_mtime_path(slug)).ok()?;
        raw.trim().parse().ok()
    }

    /// A docset is stale when it is not installed, its freshness token
    /// cannot be read, or the stored token is strictly less than the
    /// remote one.
    pub fn is_stale(&self, slug: &str, remote_mtime: i64) -> bool {
        if !self.exists(slug) {
            return true;
        }
        match self.freshness(slug) {
            Some(stored) => stored < remote_mtime,
            None => true,
        }
    }

    // -- Raw remote blobs --

    pub fn save_index(&self, slug: &str, raw: &str) -> Result<()> {
        fs::write(self.dirs.index_path(slug), raw)?;
        Ok(())
    }

    pub fn load_index(&self, slug: &str) -> Result<DocsetIndex> {
        let raw = fs::read_to_string(self.dirs.index_path(slug))
            .map_err(|_| Error::NotInstalled { slug: slug.into() })?;
        serde_json::from_str(&raw).map_err(|source| Error::MalformedCatalog {
            slug: slug.into(),
            source,
        })
    }

    pub fn save_db(&self, slug: &str, raw: &str) -> Result<()> {
        fs::write(self.dirs.db_path(slug), raw)?;
        Ok(())
    }

    pub fn load_db(&self, slug: &str) -> Result<HashMap<String, String>> {
        let raw = fs::read_to_string(self.dirs.db_path(slug))
            .map_err(|_| Error::NotInstalled { slug: slug.into() })?;
        serde_json::from_str(&raw).map_err(|source| Error::MalformedContent {
            slug: slug.into(),
            source,
        })
    }

    // -- Materialization --

    /// Write a docset's flat content map as an on-disk HTML tree with
    /// rewritten hyperlinks. Existing files are overwritten. A write
    /// failure aborts the remaining writes and propagates; files already
    /// written stay on disk.
    pub fn materialize(
        &self,
        slug: &str,
        content: &HashMap<String, String>,
    ) -> Result<usize> {
        let html_root = self.dirs.html_dir(slug);
        fs::create_dir_all(&html_root)?;

        for (doc_path, html) in content {
            let (file, _fragment) = resolve::resolve(doc_path);
            let dest = html_root.join(&file);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }

            // The containing directory, relative to the html root, is
            // the context links are rewritten against.
            let current_dir = match file.rfind('/') {
                Some(idx) => &file[..idx],
                None => "",
            };
            let fixed = links::rewrite(html, current_dir);
            fs::write(&dest, fixed)?;
        }

        tracing::debug!(slug, files = content.len(), "materialized docset");
        Ok(content.len())
    }

    /// Absolute path and fragment for one entry of a materialized
    /// docset. After [`CacheStore::materialize`] has run, the path is
    /// guaranteed to exist on disk.
    pub fn document_path(
        &self,
        slug: &str,
        doc_path: &str,
    ) -> (PathBuf, String) {
        let (file, fragment) = resolve::resolve(doc_path);
        (self.dirs.html_dir(slug).join(file), fragment)
    }
}
