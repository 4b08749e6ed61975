use std::{fmt::Display, path::PathBuf, sync::Arc};

use anyhow::Result;
use tracing::Instrument;

use crate::cli::RelayArgs;
use crate::error::RelayError;
use crate::event::{WorkflowRun, WorkflowRunEvent};
use crate::platform::{DryRun, GitHub, Platform};

mod bundle;
pub(crate) mod message;
mod notify;
mod resolve;

pub(crate) use notify::LabelPolicy;

pub(crate) struct RelayOptions {
    /// Where `message.txt` is written
    pub workdir: PathBuf,
    pub label_policy: LabelPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The upstream run was skipped, nothing was looked up.
    Skipped,
    /// The report was assembled but the artifact names no PR.
    NoPullRequest,
    Notified { pr: u64 },
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Skipped => write!(f, "upstream run was skipped"),
            Outcome::NoPullRequest => write!(f, "no pull request to report to"),
            Outcome::Notified { pr } => write!(f, "reported to PR #{pr}"),
        }
    }
}

/// Resolve, download and assemble the benchmark report of `run`, then post it to its PR.
pub(crate) async fn relay<P: Platform>(
    platform: &P,
    run: &WorkflowRun,
    options: &RelayOptions,
) -> Result<Outcome, RelayError> {
    if run.is_skipped() {
        tracing::info!("Upstream {run} was skipped, nothing to report");
        return Ok(Outcome::Skipped);
    }
    let artifact = resolve::resolve(platform, run).await?;
    let bundle = bundle::fetch_and_unpack(platform, &artifact).await?;
    let body = message::assemble(&bundle, &run.html_url);
    message::write(&options.workdir, &body)?;
    notify::notify(platform, bundle.pr_number, &body, options.label_policy).await?;
    Ok(match bundle.pr_number {
        Some(pr) => Outcome::Notified { pr },
        None => Outcome::NoPullRequest,
    })
}

pub(crate) async fn relay_from_args(args: RelayArgs) -> Result<Outcome> {
    let run = WorkflowRunEvent::from_path(&args.event_path)?.workflow_run;
    let span = tracing::info_span!("relay", repo = %args.repository, run_id = run.id);
    async move {
        let outcome = if run.is_skipped() {
            // checked before the client exists, so no token is needed
            tracing::info!("Upstream {run} was skipped, nothing to report");
            Outcome::Skipped
        } else {
            let options = RelayOptions {
                workdir: args.workdir,
                label_policy: if args.best_effort_unlabel {
                    LabelPolicy::BestEffort
                } else {
                    LabelPolicy::Required
                },
            };
            let github = GitHub::new(Arc::new(args.auth.try_into_octocrab()?), args.repository);
            if args.dry_run {
                relay(&DryRun(github), &run, &options).await?
            } else {
                relay(&github, &run, &options).await?
            }
        };
        tracing::info!("Done: {outcome}");
        Ok::<_, anyhow::Error>(outcome)
    }
    .instrument(span)
    .await
}
