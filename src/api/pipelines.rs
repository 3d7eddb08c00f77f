use log::info;

use super::client::ApiClient;
use super::types::PipelineSummary;
use crate::error::Result;

impl ApiClient {
    /// Fetch the data pipeline summaries for a project.
    pub async fn fetch_pipelines(&self, project_id: u64) -> Result<Vec<PipelineSummary>> {
        let pipelines: Vec<PipelineSummary> = self
            .get_json(&format!("/api/v1/projects/{project_id}/pipelines"))
            .await?;

        info!("Fetched {} pipelines for project {project_id}", pipelines.len());

        Ok(pipelines)
    }
}
