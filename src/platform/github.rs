use std::sync::Arc;

use futures::TryStreamExt;
use octocrab::{
    models::{workflows::WorkflowListArtifact, ArtifactId},
    params::actions::ArchiveFormat,
    Octocrab, Page,
};
use serde_json::json;

use super::{Artifact, Platform, PlatformError, RepoSlug};

const PER_PAGE: u8 = 100;

/// [`Platform`] backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub(crate) struct GitHub {
    client: Arc<Octocrab>,
    repo: RepoSlug,
}

impl GitHub {
    pub(crate) fn new(client: Arc<Octocrab>, repo: RepoSlug) -> Self {
        Self { client, repo }
    }
}

impl Platform for GitHub {
    async fn list_artifacts(&self, run_id: u64) -> Result<Vec<Artifact>, PlatformError> {
        let to_err = |e| PlatformError::new("list workflow run artifacts", e);
        // built by hand: octocrab's `list_workflow_run_artifacts` drops `per_page`
        let route = format!(
            "/repos/{}/{}/actions/runs/{run_id}/artifacts",
            self.repo.owner, self.repo.name
        );
        let first_page: Page<WorkflowListArtifact> = self
            .client
            .get(route, Some(&json!({ "per_page": PER_PAGE })))
            .await
            .map_err(to_err)?;
        let artifacts = first_page
            .into_stream(&self.client)
            .map_ok(|a| Artifact {
                id: a.id.0,
                name: a.name,
            })
            .try_collect::<Vec<_>>()
            .await
            .map_err(to_err)?;
        tracing::debug!("Run {run_id} has {} artifacts", artifacts.len());
        Ok(artifacts)
    }

    async fn download_artifact(&self, artifact_id: u64) -> Result<Vec<u8>, PlatformError> {
        let bytes = self
            .client
            .actions()
            .download_artifact(
                &self.repo.owner,
                &self.repo.name,
                ArtifactId(artifact_id),
                ArchiveFormat::Zip,
            )
            .await
            .map_err(|e| PlatformError::new("download artifact", e))?;
        Ok(bytes.to_vec())
    }

    async fn create_comment(&self, issue_number: u64, body: &str) -> Result<(), PlatformError> {
        let comment = self
            .client
            .issues(&self.repo.owner, &self.repo.name)
            .create_comment(issue_number, body)
            .await
            .map_err(|e| PlatformError::new("create comment", e))?;
        tracing::info!("Created comment at {}", comment.html_url);
        Ok(())
    }

    async fn remove_label(&self, issue_number: u64, label: &str) -> Result<(), PlatformError> {
        self.client
            .issues(&self.repo.owner, &self.repo.name)
            .remove_label(issue_number, label)
            .await
            .map_err(|e| PlatformError::new("remove label", e))?;
        Ok(())
    }
}
