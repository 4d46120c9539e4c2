//! Blocking HTTP client for the remote documentation source.
//!
//! The remote exposes three endpoints: a global catalog listing, a
//! per-docset catalog and a per-docset content bundle. The freshness
//! token is appended as a cache-busting query string, the same way the
//! upstream web app fetches them.

use std::collections::HashMap;
use std::io::Read;

use crate::cache::CacheStore;
use crate::catalog::{DocsetDescriptor, DocsetIndex, DocsetMeta};
use crate::error::{Error, Result};

pub const CATALOG_URL: &str = "https://devdocs.io/docs.json";
pub const DOCS_BASE_URL: &str = "https://devdocs.io/docs";
pub const DOCUMENTS_BASE_URL: &str = "https://documents.devdocs.io";

pub struct RemoteClient {
    agent: ureq::Agent,
}

impl Default for RemoteClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteClient {
    pub fn new() -> Self {
        Self {
            agent: ureq::agent(),
        }
    }

    fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "fetching");
        let response = self.agent.get(url).call().map_err(Box::new)?;
        // Content bundles run to tens of megabytes; read the body
        // through a reader instead of the capped into_string().
        let mut body = String::new();
        response.into_reader().read_to_string(&mut body)?;
        Ok(body)
    }

    /// Fetch the global catalog listing.
    pub fn list_docsets(&self) -> Result<Vec<DocsetDescriptor>> {
        let body = self.fetch(CATALOG_URL)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch a docset's catalog, verbatim.
    pub fn fetch_index_raw(&self, slug: &str, mtime: i64) -> Result<String> {
        self.fetch(&format!("{DOCS_BASE_URL}/{slug}/index.json?{mtime}"))
    }

    /// Fetch a docset's content bundle, verbatim.
    pub fn fetch_db_raw(&self, slug: &str, mtime: i64) -> Result<String> {
        self.fetch(&format!("{DOCUMENTS_BASE_URL}/{slug}/db.json?{mtime}"))
    }

    /// Install or refresh a docset: fetch and store the raw catalog and
    /// content bundle, write the metadata record, then materialize the
    /// offline mirror. A re-download overwrites the install wholesale.
    /// Returns the number of materialized files.
    pub fn install(
        &self,
        cache: &CacheStore,
        docset: &DocsetDescriptor,
    ) -> Result<usize> {
        cache.ensure(&docset.slug)?;

        let index_raw = self.fetch_index_raw(&docset.slug, docset.mtime)?;
        serde_json::from_str::<DocsetIndex>(&index_raw).map_err(|source| {
            Error::MalformedCatalog {
                slug: docset.slug.clone(),
                source,
            }
        })?;
        cache.save_index(&docset.slug, &index_raw)?;

        let db_raw = self.fetch_db_raw(&docset.slug, docset.mtime)?;
        let content: HashMap<String, String> = serde_json::from_str(&db_raw)
            .map_err(|source| Error::MalformedContent {
            slug: docset.slug.clone(),
            source,
        })?;
        cache.save_db(&docset.slug, &db_raw)?;

        cache.save_meta(
            &docset.slug,
            &DocsetMeta {
                release: docset.release.clone(),
                version: docset.version.clone(),
                mtime: docset.mtime,
            },
        )?;

        cache.materialize(&docset.slug, &content)
    }
}
