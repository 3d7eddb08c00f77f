mod branches;
mod client;
mod experiments;
mod jobs;
mod pipelines;
mod types;

pub use client::ApiClient;
pub use types::{Branch, Job, JobStatus, PipelineKind, PipelineSummary};
