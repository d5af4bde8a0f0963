//! Remote document model and fetching.
//!
//! The local store is seeded from a gist-like JSON document whose `files`
//! map carries the CSV payload as a single `content` string.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::time::Duration;

use log::{debug, info, warn};
use serde::Deserialize;

use crate::error::FetchError;

#[derive(Deserialize, Debug, Clone)]
pub struct RemoteFile {
    #[serde(default)]
    pub filename: String,
    #[serde(default, rename = "type")]
    pub file_type: String,
    pub content: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RemoteDocument {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub id: String,
    pub files: HashMap<String, RemoteFile>,
}

impl RemoteDocument {
    /// Decodes a document body and pulls out the content of `file_name`.
    ///
    /// `url` is only used to give errors some context.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::DecodeFailure`] if the body is not a JSON
    /// document of the expected shape, or if it has no file called
    /// `file_name`.
    pub fn extract_content(body: &str, url: &str, file_name: &str) -> Result<String, FetchError> {
        let document: RemoteDocument =
            serde_json::from_str(body).map_err(|e| FetchError::decode_failure(url, e.to_string()))?;

        document.into_content(url, file_name)
    }

    fn into_content(mut self, url: &str, file_name: &str) -> Result<String, FetchError> {
        match self.files.remove(file_name) {
            Some(file) => Ok(file.content),
            None => Err(FetchError::decode_failure(
                url,
                format!("the document has no `{file_name}` file"),
            )),
        }
    }
}

/// Where a store is loaded from: the document URL plus the file inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSource {
    pub url: String,
    pub file_name: String,
}

impl RemoteSource {
    pub fn new(url: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            file_name: file_name.into(),
        }
    }
}

impl Display for RemoteSource {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.url)
    }
}

/// Retrieves the raw CSV content of a remote source.
pub trait DocumentFetcher {
    /// # Errors
    ///
    /// Returns [`FetchError::NetworkFailure`] if the request does not
    /// succeed and [`FetchError::DecodeFailure`] if the response is not a
    /// usable document.
    fn fetch(&self, source: &RemoteSource) -> Result<String, FetchError>;
}

/// Fetches documents over HTTP with a blocking client.
///
/// No timeout is set, so an endpoint that never answers blocks the caller.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Client settings shared by every fetcher: bowme user agent, and the
    /// blocking client's default request timeout switched off.
    pub fn client_builder() -> reqwest::blocking::ClientBuilder {
        reqwest::blocking::Client::builder()
            .user_agent(concat!("bowme/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
    }

    pub fn new() -> Self {
        let client = Self::client_builder()
            .build()
            .unwrap_or_else(|err| {
                warn!("Failed to build HTTP client, falling back to defaults: {err}");
                reqwest::blocking::Client::new()
            });

        Self { client }
    }

    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFetcher for HttpFetcher {
    fn fetch(&self, source: &RemoteSource) -> Result<String, FetchError> {
        info!("Fetching `{}` from {}", source.file_name, source.url);

        let response = self
            .client
            .get(&source.url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| FetchError::network_failure(&source.url, e))?;

        let body = response
            .text()
            .map_err(|e| FetchError::network_failure(&source.url, e))?;
        debug!("Received {} bytes from {}", body.len(), source.url);

        RemoteDocument::extract_content(&body, &source.url, &source.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://api.github.com/gists/abc";

    #[test]
    fn test_extract_content_returns_named_file() {
        let body = r#"{
            "url": "https://api.github.com/gists/abc",
            "id": "abc",
            "files": {
                "bowme.csv": {
                    "filename": "bowme.csv",
                    "type": "text/csv",
                    "content": "git-log,git log --oneline\nls,ls -la\n"
                },
                "other.txt": {
                    "filename": "other.txt",
                    "type": "text/plain",
                    "content": "ignored"
                }
            }
        }"#;

        let content = RemoteDocument::extract_content(body, URL, "bowme.csv").unwrap();
        assert_eq!(content, "git-log,git log --oneline\nls,ls -la\n");
    }

    #[test]
    fn test_extract_content_keeps_content_verbatim() {
        let body = r#"{"files": {"are.csv": {"content": "  a , b \r\nc,d"}}}"#;
        let content = RemoteDocument::extract_content(body, URL, "are.csv").unwrap();
        assert_eq!(content, "  a , b \r\nc,d");
    }

    #[test]
    fn test_extract_content_invalid_json() {
        let result = RemoteDocument::extract_content("<html>rate limited</html>", URL, "bowme.csv");
        assert!(matches!(result, Err(FetchError::DecodeFailure { .. })));
    }

    #[test]
    fn test_extract_content_wrong_shape() {
        let body = r#"{"message": "Not Found"}"#;
        let result = RemoteDocument::extract_content(body, URL, "bowme.csv");
        assert!(matches!(result, Err(FetchError::DecodeFailure { .. })));
    }

    #[test]
    fn test_extract_content_missing_file() {
        let body = r#"{"files": {"are.csv": {"content": "a,b"}}}"#;
        let result = RemoteDocument::extract_content(body, URL, "bowme.csv");
        match result {
            Err(FetchError::DecodeFailure { url, reason }) => {
                assert_eq!(url, URL);
                assert!(reason.contains("bowme.csv"));
            }
            other => panic!("Expected a decode failure, got {other:?}"),
        }
    }

    #[test]
    fn test_remote_source_display() {
        let source = RemoteSource::new(URL, "bowme.csv");
        assert_eq!(source.to_string(), URL);
    }
}
