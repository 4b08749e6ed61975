use serde::Deserialize;

/// A stripped down version of [`octocrab::models::webhook_events::WebhookEvent`]
/// that only matches `workflow_run` events.
#[allow(dead_code)]
#[derive(Deserialize, Debug, Clone)]
pub(crate) struct WorkflowRunEvent {
    /// `requested`, `in_progress` or `completed`
    pub action: String,
    /// The upstream run that triggered this event
    pub workflow_run: WorkflowRun,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct WorkflowRun {
    pub id: u64,
    pub run_number: u64,
    pub run_attempt: u64,
    pub html_url: String,
    /// `null` until the run has completed.
    pub conclusion: Option<String>,
}

impl WorkflowRun {
    pub(crate) fn is_skipped(&self) -> bool {
        self.conclusion.as_deref() == Some("skipped")
    }
}
