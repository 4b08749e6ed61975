use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::platform::RepoSlug;

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Post the results of a finished benchmark run to its pull request
    Relay(RelayArgs),
    /// Assemble a comment body from local message files
    Assemble(AssembleArgs),
}

#[derive(Args)]
pub(crate) struct RelayArgs {
    /// Repository the benchmark workflow ran in, as `owner/name`
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub(crate) repository: RepoSlug,
    /// `workflow_run` event payload of the finished benchmark run
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub(crate) event_path: PathBuf,
    /// Directory to write `message.txt` into
    #[arg(long, default_value = ".")]
    pub(crate) workdir: PathBuf,
    /// Only log the comment and label removal
    #[arg(long)]
    pub(crate) dry_run: bool,
    /// Don’t fail if the label can’t be removed after commenting
    #[arg(long)]
    pub(crate) best_effort_unlabel: bool,
    #[command(flatten)]
    pub(crate) auth: AuthArgs,
}

#[derive(Args, Default)]
pub(crate) struct AuthArgs {
    /// GitHub token. If not set, the `github_token` systemd credential is used.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub(crate) github_token: Option<String>,
    /// GitHub REST API root
    #[arg(long, env = "GITHUB_API_URL")]
    pub(crate) api_url: Option<String>,
}

#[derive(Args)]
pub(crate) struct AssembleArgs {
    /// Results of the Qt benchmarks
    #[arg(long, default_value = "message_Qt.txt")]
    pub(crate) qt: PathBuf,
    /// Results of the non-Qt benchmarks
    #[arg(long, default_value = "message_non-Qt.txt")]
    pub(crate) non_qt: PathBuf,
    /// URL to the benchmark run’s logs
    #[arg(long)]
    pub(crate) logs_url: String,
    #[arg(long, short, default_value = "message.txt")]
    pub(crate) output: PathBuf,
}
