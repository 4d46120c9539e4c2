//! docdex - offline documentation mirrors with fuzzy search.
//!
//! docdex downloads documentation sets from [DevDocs](https://devdocs.io),
//! materializes each one as a browsable HTML tree with every hyperlink
//! rewritten to a relative on-disk path, and searches entry names across
//! every installed set with a scored fuzzy matcher.
//!
//! # Quick start
//!
//! ```no_run
//! use docdex::{CacheStore, DataDir};
//! use docdex::search;
//!
//! let data_dir = DataDir::resolve(None).unwrap();
//! let cache = CacheStore::new(data_dir);
//!
//! let hits = search::search_all(&cache, "flexbox").unwrap();
//! for hit in &hits {
//!     println!("{}: {}  {}", hit.slug, hit.entry.display(), hit.entry.path);
//! }
//! ```

pub mod cache;
pub mod catalog;
pub mod client;
pub mod data_dir;
pub mod error;
pub mod fuzzy;
pub mod links;
pub mod resolve;
pub mod search;
pub mod version;
pub mod viewer;

pub use cache::CacheStore;
pub use catalog::{DocsetDescriptor, DocsetIndex, DocsetMeta, DocumentEntry};
pub use client::RemoteClient;
pub use data_dir::DataDir;
pub use error::{Error, Result};
