//! Configuration defaults and path utilities for bowme.
//!
//! This module holds the compiled-in defaults (store file name, remote
//! document identifier) and resolves them into the explicit values the
//! store and fetcher are constructed with.

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::{Error, Result};
use crate::remote::RemoteSource;

/// File name of the local store inside the home directory
pub const DEFAULT_STORE_FILE_NAME: &str = ".bowme";
/// Gist that seeds the local store on first use
pub const DEFAULT_GIST_ID: &str = "55cddaa1b0c35c26cac0bace2f2b6940";
/// File inside the remote document that holds the CSV payload
pub const DEFAULT_DOCUMENT_FILE_NAME: &str = "bowme.csv";

const GIST_API_BASE: &str = "https://api.github.com/gists/";

/// Resolves the local store path.
///
/// If a custom path is provided, uses that path with `~` expanded. Otherwise
/// the store lives at `~/.bowme`.
///
/// # Errors
///
/// Returns [`Error::NoHomeDirectory`] if no path was given and the home
/// directory of the current user cannot be determined.
///
/// # Examples
///
/// ```
/// use bowme_core::config::get_store_path;
///
/// let custom_path = get_store_path(&Some("/tmp/commands.csv".to_string()))?;
/// assert_eq!(custom_path.to_str(), Some("/tmp/commands.csv"));
/// # Ok::<(), bowme_core::error::Error>(())
/// ```
pub fn get_store_path(store_path_arg: &Option<String>) -> Result<PathBuf> {
    if let Some(store_path) = store_path_arg {
        return Ok(PathBuf::from(shellexpand::tilde(store_path).as_ref()));
    }

    let base_dirs = BaseDirs::new().ok_or(Error::NoHomeDirectory)?;
    Ok(base_dirs.home_dir().join(DEFAULT_STORE_FILE_NAME))
}

/// Turns a user supplied location into a document URL.
///
/// Anything that already looks like an HTTP(S) URL is kept verbatim, every
/// other value is treated as a gist identifier.
///
/// # Examples
///
/// ```
/// use bowme_core::config::resolve_source_url;
///
/// assert_eq!(resolve_source_url("abc123"), "https://api.github.com/gists/abc123");
/// assert_eq!(resolve_source_url("https://example.com/doc"), "https://example.com/doc");
/// ```
pub fn resolve_source_url(location: &str) -> String {
    let location = location.trim();
    if location.starts_with("http://") || location.starts_with("https://") {
        location.to_string()
    } else {
        format!("{GIST_API_BASE}{location}")
    }
}

/// Builds the source used to seed a missing store.
///
/// `gist_id` overrides [`DEFAULT_GIST_ID`], `file_name` overrides
/// [`DEFAULT_DOCUMENT_FILE_NAME`].
pub fn default_source(gist_id: Option<&str>, file_name: Option<&str>) -> RemoteSource {
    let gist_id = gist_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .unwrap_or(DEFAULT_GIST_ID);

    RemoteSource::new(
        resolve_source_url(gist_id),
        file_name.unwrap_or(DEFAULT_DOCUMENT_FILE_NAME),
    )
}
