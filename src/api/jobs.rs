use log::info;

use super::client::ApiClient;
use super::types::Job;
use crate::error::Result;

impl ApiClient {
    /// Fetch a job by id. The returned record carries the authoritative
    /// duration.
    pub async fn fetch_job(&self, project_id: u64, job_id: u64) -> Result<Job> {
        let job: Job = self
            .get_json(&format!("/api/v1/projects/{project_id}/jobs/{job_id}"))
            .await?;

        info!("Fetched job {job_id} (status: {})", job.status);

        Ok(job)
    }

    /// Fetch the raw log blob of a job. An empty payload means the log has
    /// not been generated yet.
    pub async fn fetch_job_trace(&self, project_id: u64, job_id: u64) -> Result<Vec<u8>> {
        self.get_bytes(&format!("/api/v1/projects/{project_id}/jobs/{job_id}/trace"))
            .await
    }
}
