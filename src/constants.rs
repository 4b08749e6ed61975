use crate::event::WorkflowRun;

pub(crate) const BENCHMARK_LABEL: &str = "run-benchmarks";
pub(crate) const LOGS_URL_PLACEHOLDER: &str = "||BENCHMARK_CI_LOGS_URL||";
pub(crate) const ARTIFACT_PREFIX: &str = "asv-benchmark-results";

pub(crate) const MESSAGE_QT_FILE: &str = "message_Qt.txt";
pub(crate) const MESSAGE_NON_QT_FILE: &str = "message_non-Qt.txt";
pub(crate) const PR_NUMBER_FILE: &str = "pr_number";
/// Largest file read from an artifact. GitHub rejects comments over 65536 characters anyway.
pub(crate) const MAX_ENTRY_BYTES: u64 = 1 << 20;
/// Written to the working directory once the comment body is assembled.
pub(crate) const MESSAGE_FILE: &str = "message.txt";

/// Name the benchmark workflow gives the artifact holding its report.
pub(crate) fn artifact_name(run: &WorkflowRun) -> String {
    format!(
        "{ARTIFACT_PREFIX}-{}-{}-{}",
        run.id, run.run_number, run.run_attempt
    )
}
