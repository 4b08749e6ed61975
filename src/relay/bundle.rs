use std::io::{Cursor, Read, Seek};

use zip::{result::ZipError, ZipArchive};

use crate::constants::{MAX_ENTRY_BYTES, MESSAGE_NON_QT_FILE, MESSAGE_QT_FILE, PR_NUMBER_FILE};
use crate::error::{MalformedArchive, RelayError};
use crate::platform::{Artifact, Platform};

/// Contents of a benchmark artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReportBundle {
    pub message_qt: String,
    pub message_non_qt: String,
    /// PR the benchmarks ran for. `None` for runs not tied to a PR.
    pub pr_number: Option<u64>,
}

impl ReportBundle {
    /// Read the report files from the root of a zip archive.
    pub(crate) fn from_zip(payload: &[u8]) -> Result<Self, MalformedArchive> {
        let mut archive = ZipArchive::new(Cursor::new(payload))?;
        let message_qt = read_entry(&mut archive, MESSAGE_QT_FILE)?
            .ok_or(MalformedArchive::MissingFile(MESSAGE_QT_FILE))?;
        let message_non_qt = read_entry(&mut archive, MESSAGE_NON_QT_FILE)?
            .ok_or(MalformedArchive::MissingFile(MESSAGE_NON_QT_FILE))?;
        let pr_number = match read_entry(&mut archive, PR_NUMBER_FILE)? {
            Some(content) => parse_pr_number(&content)?,
            None => None,
        };
        Ok(Self {
            message_qt,
            message_non_qt,
            pr_number,
        })
    }
}

pub(crate) async fn fetch_and_unpack<P: Platform>(
    platform: &P,
    artifact: &Artifact,
) -> Result<ReportBundle, RelayError> {
    tracing::info!("Downloading artifact {} ({})", artifact.name, artifact.id);
    let payload = platform.download_artifact(artifact.id).await?;
    tracing::debug!("Downloaded {} bytes", payload.len());
    Ok(ReportBundle::from_zip(&payload)?)
}

fn read_entry<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &'static str,
) -> Result<Option<String>, MalformedArchive> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    // the sizes in the zip headers are whatever the uploader put there
    let mut contents = Vec::new();
    file.by_ref()
        .take(MAX_ENTRY_BYTES + 1)
        .read_to_end(&mut contents)
        .map_err(|source| MalformedArchive::Read { file: name, source })?;
    if contents.len() as u64 > MAX_ENTRY_BYTES {
        return Err(MalformedArchive::TooLarge {
            file: name,
            limit: MAX_ENTRY_BYTES,
        });
    }
    String::from_utf8(contents)
        .map(Some)
        .map_err(|source| MalformedArchive::NotUtf8 { file: name, source })
}

/// An empty file means the same as no file.
fn parse_pr_number(content: &str) -> Result<Option<u64>, MalformedArchive> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(None);
    }
    content
        .parse()
        .map(Some)
        .map_err(|source| MalformedArchive::InvalidPrNumber {
            content: content.to_owned(),
            source,
        })
}
