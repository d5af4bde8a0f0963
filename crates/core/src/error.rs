use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures while retrieving the remote document.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Can not get the remote document from `{}`: {}", .url, .original)]
    NetworkFailure {
        url: String,
        original: reqwest::Error,
    },

    #[error("Can not decode the remote document from `{}`: {}", .url, .reason)]
    DecodeFailure { url: String, reason: String },
}

impl FetchError {
    pub fn network_failure(url: &str, original: reqwest::Error) -> Self {
        Self::NetworkFailure {
            url: url.to_string(),
            original,
        }
    }

    pub fn decode_failure(url: &str, reason: impl Into<String>) -> Self {
        Self::DecodeFailure {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Can not resolve the home directory for the bowme file")]
    NoHomeDirectory,

    #[error("bowme file does not exist at `{}`", .path)]
    NotFound { path: String },

    #[error("Can not write to the bowme file at `{}`: {}", .path, .original)]
    WriteFailure {
        path: String,
        original: std::io::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Invalid search pattern: {}", .0)]
    Pattern(#[from] regex::Error),

    #[error("STDIO error: {}", .0)]
    Stdio(std::io::Error),
}

impl Error {
    pub fn not_found(path: String) -> Self {
        Self::NotFound { path }
    }

    pub fn write_failure(path: String, original: std::io::Error) -> Self {
        Self::WriteFailure { path, original }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}

/// Reasons a single store row is dropped instead of indexed.
///
/// These never reach the caller; the reader logs them and moves on.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MalformedRecord {
    #[error("expected 2 fields, found {}", .0)]
    FieldCount(usize),

    #[error("empty key or command")]
    EmptyField,
}
