use std::{
    io::{Cursor, Write},
    sync::Mutex,
};

use serde_json::json;
use zip::{write::SimpleFileOptions, ZipWriter};

use crate::event::WorkflowRun;
use crate::platform::{Artifact, Platform, PlatformError};

/// A trimmed `workflow_run` event as GitHub Actions stores it in `GITHUB_EVENT_PATH`.
pub(crate) const WORKFLOW_RUN_EVENT: &str = r#"{
  "action": "completed",
  "workflow_run": {
    "id": 9876543210,
    "name": "Benchmarks",
    "node_id": "WFR_kwLOBMdJTM8AAAACTMKp6g",
    "head_branch": "faster-shapes",
    "head_sha": "f88f7bd4250b963752d615e491b7e676ce5eb7f0",
    "path": ".github/workflows/benchmarks.yml",
    "display_title": "Speed up shape layer rendering",
    "run_number": 1234,
    "event": "pull_request",
    "status": "completed",
    "conclusion": "success",
    "workflow_id": 20192453,
    "check_suite_id": 23453345633,
    "url": "https://api.github.com/repos/napari/napari/actions/runs/9876543210",
    "html_url": "https://github.com/napari/napari/actions/runs/9876543210",
    "pull_requests": [],
    "created_at": "2024-05-06T10:42:01Z",
    "updated_at": "2024-05-06T11:58:44Z",
    "run_attempt": 2,
    "run_started_at": "2024-05-06T11:20:13Z",
    "artifacts_url": "https://api.github.com/repos/napari/napari/actions/runs/9876543210/artifacts"
  },
  "repository": {
    "id": 144513571,
    "name": "napari",
    "full_name": "napari/napari"
  }
}"#;

/// Response of `POST /repos/{owner}/{repo}/issues/{number}/comments`.
pub(crate) const COMMENT: &str = r#"{
  "id": 2096515632,
  "node_id": "IC_kwDOAQtJk859ESow",
  "url": "https://api.github.com/repos/napari/napari/issues/comments/2096515632",
  "html_url": "https://github.com/napari/napari/pull/42#issuecomment-2096515632",
  "issue_url": "https://api.github.com/repos/napari/napari/issues/42",
  "body": "Benchmark results",
  "user": {
    "login": "github-actions[bot]",
    "id": 41898282,
    "node_id": "MDM6Qm90NDE4OTgyODI=",
    "avatar_url": "https://avatars.githubusercontent.com/in/15368?v=4",
    "gravatar_id": "",
    "url": "https://api.github.com/users/github-actions%5Bbot%5D",
    "html_url": "https://github.com/apps/github-actions",
    "followers_url": "https://api.github.com/users/github-actions%5Bbot%5D/followers",
    "following_url": "https://api.github.com/users/github-actions%5Bbot%5D/following{/other_user}",
    "gists_url": "https://api.github.com/users/github-actions%5Bbot%5D/gists{/gist_id}",
    "starred_url": "https://api.github.com/users/github-actions%5Bbot%5D/starred{/owner}{/repo}",
    "subscriptions_url": "https://api.github.com/users/github-actions%5Bbot%5D/subscriptions",
    "organizations_url": "https://api.github.com/users/github-actions%5Bbot%5D/orgs",
    "repos_url": "https://api.github.com/users/github-actions%5Bbot%5D/repos",
    "events_url": "https://api.github.com/users/github-actions%5Bbot%5D/events{/privacy}",
    "received_events_url": "https://api.github.com/users/github-actions%5Bbot%5D/received_events",
    "type": "Bot",
    "site_admin": false
  },
  "created_at": "2024-05-06T11:59:02Z",
  "updated_at": "2024-05-06T11:59:02Z",
  "author_association": "NONE"
}"#;

pub(crate) fn workflow_run() -> WorkflowRun {
    WorkflowRun {
        id: 9_876_543_210,
        run_number: 1234,
        run_attempt: 2,
        html_url: "https://github.com/napari/napari/actions/runs/9876543210".to_owned(),
        conclusion: Some("success".to_owned()),
    }
}

pub(crate) fn artifact(id: u64, name: &str) -> Artifact {
    Artifact {
        id,
        name: name.to_owned(),
    }
}

/// One entry of `GET /repos/{owner}/{repo}/actions/runs/{run_id}/artifacts`.
pub(crate) fn artifact_json(id: u64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "node_id": "MDg6QXJ0aWZhY3QxMQ==",
        "name": name,
        "size_in_bytes": 556,
        "url": format!("https://api.github.com/repos/napari/napari/actions/artifacts/{id}"),
        "archive_download_url": format!("https://api.github.com/repos/napari/napari/actions/artifacts/{id}/zip"),
        "expired": false,
        "created_at": "2024-05-06T11:58:30Z",
        "expires_at": "2024-08-04T11:58:30Z",
        "updated_at": "2024-05-06T11:58:31Z",
    })
}

pub(crate) fn zip_archive(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    ListArtifacts(u64),
    DownloadArtifact(u64),
    CreateComment(u64, String),
    RemoveLabel(u64, String),
}

/// In-memory [`Platform`] that records every call it receives.
#[derive(Debug, Default)]
pub(crate) struct RecordingPlatform {
    artifacts: Vec<Artifact>,
    payload: Vec<u8>,
    failing_operation: Option<&'static str>,
    calls: Mutex<Vec<Call>>,
}

impl RecordingPlatform {
    pub(crate) fn new(artifacts: Vec<Artifact>) -> Self {
        Self {
            artifacts,
            ..Self::default()
        }
    }

    /// Every artifact downloads as `payload`.
    pub(crate) fn with_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    /// Calls to `operation` are recorded, then fail.
    pub(crate) fn failing_on(mut self, operation: &'static str) -> Self {
        self.failing_operation = Some(operation);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str, call: Call) -> Result<(), PlatformError> {
        self.calls.lock().unwrap().push(call);
        if self.failing_operation == Some(operation) {
            return Err(PlatformError::new(operation, "Server Error"));
        }
        Ok(())
    }
}

impl Platform for RecordingPlatform {
    async fn list_artifacts(&self, run_id: u64) -> Result<Vec<Artifact>, PlatformError> {
        self.record("list workflow run artifacts", Call::ListArtifacts(run_id))?;
        Ok(self.artifacts.clone())
    }

    async fn download_artifact(&self, artifact_id: u64) -> Result<Vec<u8>, PlatformError> {
        self.record("download artifact", Call::DownloadArtifact(artifact_id))?;
        Ok(self.payload.clone())
    }

    async fn create_comment(&self, issue_number: u64, body: &str) -> Result<(), PlatformError> {
        self.record(
            "create comment",
            Call::CreateComment(issue_number, body.to_owned()),
        )
    }

    async fn remove_label(&self, issue_number: u64, label: &str) -> Result<(), PlatformError> {
        self.record(
            "remove label",
            Call::RemoveLabel(issue_number, label.to_owned()),
        )
    }
}
