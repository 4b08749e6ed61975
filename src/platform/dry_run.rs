use super::{Artifact, Platform, PlatformError};

/// Reads go to the wrapped platform, writes are only logged.
#[derive(Debug, Clone)]
pub(crate) struct DryRun<P>(pub P);

impl<P: Platform> Platform for DryRun<P> {
    async fn list_artifacts(&self, run_id: u64) -> Result<Vec<Artifact>, PlatformError> {
        self.0.list_artifacts(run_id).await
    }

    async fn download_artifact(&self, artifact_id: u64) -> Result<Vec<u8>, PlatformError> {
        self.0.download_artifact(artifact_id).await
    }

    async fn create_comment(&self, issue_number: u64, body: &str) -> Result<(), PlatformError> {
        tracing::info!(
            "[dry run] Would comment on #{issue_number} ({} bytes):\n{body}",
            body.len()
        );
        Ok(())
    }

    async fn remove_label(&self, issue_number: u64, label: &str) -> Result<(), PlatformError> {
        tracing::info!("[dry run] Would remove label `{label}` from #{issue_number}");
        Ok(())
    }
}
