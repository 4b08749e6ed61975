use anyhow::{Context, Result};
use std::{fmt::Display, fs::File, io::BufReader, path::Path};

mod github;

pub(crate) use github::{WorkflowRun, WorkflowRunEvent};

impl WorkflowRunEvent {
    /// Read the event payload GitHub Actions stores at `GITHUB_EVENT_PATH`.
    pub(crate) fn from_path(path: &Path) -> Result<Self> {
        let reader = BufReader::new(
            File::open(path).with_context(|| format!("failed to open event payload {path:?}"))?,
        );
        serde_json::from_reader(reader)
            .with_context(|| format!("{path:?} is not a workflow_run event payload"))
    }
}

impl Display for WorkflowRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "workflow run {} (#{}, attempt {})",
            self.id, self.run_number, self.run_attempt
        )?;
        if let Some(conclusion) = &self.conclusion {
            write!(f, ": {conclusion}")?;
        }
        Ok(())
    }
}
