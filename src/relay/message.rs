use std::path::{Path, PathBuf};

use crate::constants::{LOGS_URL_PLACEHOLDER, MESSAGE_FILE};
use crate::error::RelayError;

use super::bundle::ReportBundle;

/// Build the comment body: Qt results, then non-Qt results, with the logs URL filled in.
pub(crate) fn assemble(bundle: &ReportBundle, logs_url: &str) -> String {
    let mut body = String::with_capacity(bundle.message_qt.len() + bundle.message_non_qt.len());
    body.push_str(&bundle.message_qt);
    body.push_str(&bundle.message_non_qt);
    fill_logs_url(&body, logs_url)
}

/// Replaces every placeholder in one pass, so a URL containing the placeholder stays as is.
fn fill_logs_url(text: &str, logs_url: &str) -> String {
    text.replace(LOGS_URL_PLACEHOLDER, logs_url)
}

/// Write the assembled body to `message.txt` in `dir`.
pub(crate) fn write(dir: &Path, body: &str) -> Result<PathBuf, RelayError> {
    let path = dir.join(MESSAGE_FILE);
    std::fs::write(&path, body).map_err(|source| RelayError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::info!("Wrote comment body to {}", path.display());
    Ok(path)
}

/// Assemble a body from message files on disk, without involving the platform.
pub(crate) fn assemble_files(
    qt: &Path,
    non_qt: &Path,
    logs_url: &str,
    output: &Path,
) -> Result<(), RelayError> {
    let read = |path: &Path| {
        std::fs::read_to_string(path).map_err(|source| RelayError::Io {
            path: path.to_owned(),
            source,
        })
    };
    let bundle = ReportBundle {
        message_qt: read(qt)?,
        message_non_qt: read(non_qt)?,
        pr_number: None,
    };
    let body = assemble(&bundle, logs_url);
    std::fs::write(output, body).map_err(|source| RelayError::Io {
        path: output.to_owned(),
        source,
    })?;
    tracing::info!("Wrote comment body to {}", output.display());
    Ok(())
}
