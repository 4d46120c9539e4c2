//! Hand-off to an external content viewer.

use std::process::{Command, Stdio};

use crate::cache::CacheStore;
use crate::error::{Error, Result};

pub const VIEWER_ENV_VAR: &str = "DOCDEX_VIEWER";
pub const DEFAULT_VIEWER: &str = "lynx";

/// The viewer command, from `DOCDEX_VIEWER` or the default.
pub fn viewer_command() -> String {
    std::env::var(VIEWER_ENV_VAR).unwrap_or_else(|_| DEFAULT_VIEWER.into())
}

/// Open one entry of an installed docset in the external viewer,
/// inheriting the terminal. The fragment, when present, is passed along
/// for viewers that support fragment addressing.
pub fn open_entry(
    cache: &CacheStore,
    slug: &str,
    doc_path: &str,
) -> Result<()> {
    if !cache.exists(slug) {
        return Err(Error::NotInstalled { slug: slug.into() });
    }

    let (file, fragment) = cache.document_path(slug, doc_path);
    let target = format!("{}{}", file.display(), fragment);

    let viewer = viewer_command();
    let status = Command::new(&viewer)
        .arg(&target)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|err| {
            Error::Viewer(format!("failed to launch '{viewer}': {err}"))
        })?;

    if !status.success() {
        return Err(Error::Viewer(format!(
            "'{viewer}' exited with {status} (tried {target})"
        )));
    }
    Ok(())
}
