//! The four GitHub capabilities the relay needs, behind a trait so the relay
//! can run against the real API, a dry-run wrapper, or a test double.

use std::{fmt::Display, str::FromStr};

use anyhow::bail;
use thiserror::Error;

mod dry_run;
mod github;

pub(crate) use dry_run::DryRun;
pub(crate) use github::GitHub;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Artifact {
    pub id: u64,
    pub name: String,
}

/// A call into the platform failed. Never retried.
#[derive(Debug, Error)]
#[error("GitHub API call `{operation}` failed")]
pub(crate) struct PlatformError {
    pub operation: &'static str,
    #[source]
    source: BoxError,
}

impl PlatformError {
    pub(crate) fn new(operation: &'static str, source: impl Into<BoxError>) -> Self {
        Self {
            operation,
            source: source.into(),
        }
    }
}

/// Repository-scoped platform calls. Owner and name are bound by the implementor.
pub(crate) trait Platform {
    /// All artifacts of a workflow run, across every page.
    async fn list_artifacts(&self, run_id: u64) -> Result<Vec<Artifact>, PlatformError>;

    /// The artifact's zip payload.
    async fn download_artifact(&self, artifact_id: u64) -> Result<Vec<u8>, PlatformError>;

    async fn create_comment(&self, issue_number: u64, body: &str) -> Result<(), PlatformError>;

    async fn remove_label(&self, issue_number: u64, label: &str) -> Result<(), PlatformError>;
}

/// `owner/name`, as found in `GITHUB_REPOSITORY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoSlug {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self {
                    owner: owner.to_owned(),
                    name: name.to_owned(),
                })
            }
            _ => bail!("expected a repository as `owner/name`, got {s:?}"),
        }
    }
}

impl Display for RepoSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
