mod decode;
mod parse;

pub use parse::{classify_line, LineClass, StyledLine};

use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::api::{ApiClient, Job, PipelineKind, PipelineSummary};
use crate::cancel::CancelToken;
use crate::error::{MlboardError, Result};
use crate::routes;

/// Ordered lines of a job's log, derived once from the decoded blob.
/// Immutable after creation; an empty document signals that no log has been
/// generated yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDocument {
    lines: Vec<String>,
}

impl LogDocument {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn empty() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// View-local state for the job log screen. Commits are no-ops once the
/// owning view has cancelled its token, so results that arrive after
/// teardown are discarded.
#[derive(Debug, Default)]
pub struct JobLogState {
    all_jobs: Vec<PipelineSummary>,
    duration: Option<f64>,
    log: Option<LogDocument>,
}

impl JobLogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all_jobs(&self) -> &[PipelineSummary] {
        &self.all_jobs
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn log(&self) -> Option<&LogDocument> {
        self.log.as_ref()
    }

    fn commit_all_jobs(&mut self, token: &CancelToken, all_jobs: Vec<PipelineSummary>) {
        if token.is_cancelled() {
            return;
        }
        self.all_jobs = all_jobs;
    }

    fn commit_duration(&mut self, token: &CancelToken, duration: Option<f64>) {
        if token.is_cancelled() {
            return;
        }
        self.duration = duration;
    }

    fn commit_log(&mut self, token: &CancelToken, log: LogDocument) {
        if token.is_cancelled() {
            return;
        }
        self.log = Some(log);
    }
}

/// Result of a log fetch round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutcome {
    /// Lines were decoded and committed.
    Loaded,
    /// The blob was empty; nothing was committed.
    NotYetGenerated,
    /// Decoding failed; an empty document was committed so the view does not
    /// hang on a loading indicator.
    DecodeFailed,
}

/// Run the job log fetch chain against `state`.
///
/// The chain is strictly sequential: pipeline summaries, then experiment
/// summaries (merged after the pipelines), then the job's authoritative
/// duration, then the log blob. The token is checked at each continuation;
/// once cancelled the chain stops without committing.
pub async fn load_job_log(
    client: &ApiClient,
    project_id: u64,
    job: &Job,
    token: &CancelToken,
    state: &mut JobLogState,
) -> Result<LogOutcome> {
    let pipelines = client.fetch_pipelines(project_id).await?;
    if token.is_cancelled() {
        return Err(MlboardError::Cancelled);
    }

    let experiments = client.fetch_experiments(project_id).await?;
    if token.is_cancelled() {
        return Err(MlboardError::Cancelled);
    }

    let mut all_jobs = pipelines;
    all_jobs.extend(experiments);
    state.commit_all_jobs(token, all_jobs);

    let fresh = client.fetch_job(project_id, job.id).await?;
    if token.is_cancelled() {
        return Err(MlboardError::Cancelled);
    }
    state.commit_duration(token, fresh.duration);

    fetch_and_commit_trace(client, project_id, job.id, token, state).await
}

/// Fetch the log blob and commit the decoded document. Split out so poll
/// rounds can re-fetch the trace without repeating the whole chain.
pub async fn fetch_and_commit_trace(
    client: &ApiClient,
    project_id: u64,
    job_id: u64,
    token: &CancelToken,
    state: &mut JobLogState,
) -> Result<LogOutcome> {
    let blob = client.fetch_job_trace(project_id, job_id).await?;
    if token.is_cancelled() {
        return Err(MlboardError::Cancelled);
    }

    if blob.is_empty() {
        info!("Job {job_id} has no log yet");
        return Ok(LogOutcome::NotYetGenerated);
    }

    match decode::decode_log_blob(&blob) {
        Ok(lines) => {
            state.commit_log(token, LogDocument::new(lines));
            Ok(LogOutcome::Loaded)
        }
        Err(err) => {
            warn!("Failed to decode log for job {job_id}: {err}");
            state.commit_log(token, LogDocument::empty());
            Ok(LogOutcome::DecodeFailed)
        }
    }
}

/// Link from a job to the page of the pipeline output it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLink {
    /// Human-readable output name, the second segment of the job ref.
    pub name: Option<String>,
    /// Kind of the matched pipeline, if any; selects the job class label.
    pub class: Option<PipelineKind>,
    pub route: String,
}

/// Derive the output link of a job from the merged summary collection.
///
/// The job's pipeline is the first summary whose name appears in the ref;
/// the pipelines-before-experiments merge order makes the choice
/// deterministic when several names match.
pub fn derive_output_link(
    job: &Job,
    all_jobs: &[PipelineSummary],
    namespace: &str,
    slug: &str,
) -> OutputLink {
    let matched = all_jobs.iter().find(|p| job.ref_.contains(&p.name));

    OutputLink {
        name: job.ref_.split('/').nth(1).map(str::to_string),
        class: matched.map(|p| p.kind),
        route: routes::output_target(namespace, slug, matched),
    }
}

/// Format a duration in seconds into a human-readable string (e.g. "2m 5s").
pub fn format_duration(secs: i64) -> String {
    let secs = secs.max(0);
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}

/// Coarse "triggered … ago" phrase for the job header.
pub fn time_created_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = now.signed_duration_since(created_at).num_seconds().max(0);
    if secs < 60 {
        format!("{secs} seconds")
    } else if secs < 3600 {
        format!("{} minutes", secs / 60)
    } else if secs < 86_400 {
        format!("{} hours", secs / 3600)
    } else {
        format!("{} days", secs / 86_400)
    }
}
