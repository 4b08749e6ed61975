use crate::constants::BENCHMARK_LABEL;
use crate::error::RelayError;
use crate::platform::Platform;

/// What to do when the label can't be removed after the comment was posted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum LabelPolicy {
    /// Fail the run.
    #[default]
    Required,
    /// Log a warning and carry on.
    BestEffort,
}

/// Comment on the PR and drop its benchmark label. Does nothing without a PR number.
pub(crate) async fn notify<P: Platform>(
    platform: &P,
    pr_number: Option<u64>,
    body: &str,
    policy: LabelPolicy,
) -> Result<(), RelayError> {
    let Some(pr) = pr_number else {
        tracing::info!("Artifact names no PR, not commenting");
        return Ok(());
    };

    tracing::info!("Commenting on PR #{pr}");
    platform.create_comment(pr, body).await?;

    match platform.remove_label(pr, BENCHMARK_LABEL).await {
        Ok(()) => tracing::info!("Removed label `{BENCHMARK_LABEL}` from PR #{pr}"),
        Err(error) if policy == LabelPolicy::BestEffort => {
            let error = anyhow::Error::from(error);
            tracing::warn!("Could not remove label `{BENCHMARK_LABEL}` from PR #{pr}: {error:#}");
        }
        Err(error) => return Err(error.into()),
    }
    Ok(())
}
