use crate::constants::artifact_name;
use crate::error::RelayError;
use crate::event::WorkflowRun;
use crate::platform::{Artifact, Platform};

/// Find the artifact the benchmark workflow uploaded for `run`.
///
/// Names are compared exactly; the first match wins.
pub(crate) async fn resolve<P: Platform>(
    platform: &P,
    run: &WorkflowRun,
) -> Result<Artifact, RelayError> {
    let expected = artifact_name(run);
    tracing::info!("Looking for artifact {expected}");
    platform
        .list_artifacts(run.id)
        .await?
        .into_iter()
        .find(|a| a.name == expected)
        .ok_or(RelayError::NotFound {
            expected,
            run_id: run.id,
        })
}
