//! Failures that abort a relay run.
//!
//! A skipped upstream run and a missing PR number are not errors; they are
//! reported through [`crate::relay::Outcome`].

use std::{num::ParseIntError, path::PathBuf, string::FromUtf8Error};

use thiserror::Error;

use crate::platform::PlatformError;

#[derive(Debug, Error)]
pub(crate) enum RelayError {
    /// The upstream run has no artifact with the expected name.
    #[error("no artifact named `{expected}` on workflow run {run_id}")]
    NotFound { expected: String, run_id: u64 },

    #[error("malformed benchmark artifact")]
    MalformedArchive(#[from] MalformedArchive),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Ways the downloaded artifact can fail to be a benchmark report.
#[derive(Debug, Error)]
pub(crate) enum MalformedArchive {
    #[error("not a readable zip archive")]
    Zip(#[from] zip::result::ZipError),

    #[error("archive has no `{0}`")]
    MissingFile(&'static str),

    #[error("failed to read `{file}` from archive")]
    Read {
        file: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("`{file}` is larger than {limit} bytes")]
    TooLarge { file: &'static str, limit: u64 },

    #[error("`{file}` is not valid UTF-8")]
    NotUtf8 {
        file: &'static str,
        #[source]
        source: FromUtf8Error,
    },

    #[error("`pr_number` holds {content:?} instead of an issue number")]
    InvalidPrNumber {
        content: String,
        #[source]
        source: ParseIntError,
    },
}
