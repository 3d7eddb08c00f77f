use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

/// A single execution unit (pipeline run or experiment run) with its
/// status, duration and log.
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub status: JobStatus,
    /// Duration in seconds. The listing payload may omit it; the by-id
    /// fetch is authoritative.
    #[serde(default)]
    pub duration: Option<f64>,
    pub user: JobUser,
    #[serde(default)]
    pub runner: Option<JobRunner>,
    /// Reference string encoding a branch/output path, e.g.
    /// "data-pipeline/gentle-badger-1/output".
    #[serde(rename = "ref")]
    pub ref_: String,
    pub pipeline: JobPipelineRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobUser {
    pub name: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobRunner {
    pub id: u64,
    pub description: String,
}

/// Owning pipeline of a job.
#[derive(Debug, Clone, Deserialize)]
pub struct JobPipelineRef {
    pub id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Running,
    Success,
    Failed,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Running => "running",
            JobStatus::Success => "success",
            JobStatus::Failed => "failed",
            JobStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lightweight descriptor of a data or visualization pipeline, used to
/// classify a job's output link target.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSummary {
    pub id: u64,
    pub name: String,
    #[serde(rename = "pipeline_type")]
    pub kind: PipelineKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PipelineKind {
    #[serde(rename = "DATA")]
    Data,
    #[serde(rename = "VISUALIZATION")]
    Visualization,
    #[serde(rename = "EXPERIMENT")]
    Experiment,
    #[serde(other)]
    Other,
}

impl PipelineKind {
    /// Human-readable job class shown next to a job's details.
    pub fn label(self) -> &'static str {
        match self {
            PipelineKind::Data => "Data pipeline",
            PipelineKind::Visualization => "Data visualization",
            PipelineKind::Experiment => "Experiment",
            PipelineKind::Other => "Unknown",
        }
    }
}

/// A version-control branch of the project repository.
#[derive(Debug, Clone, Deserialize)]
pub struct Branch {
    pub name: String,
}
