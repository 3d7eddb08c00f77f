use log::info;

use super::client::ApiClient;
use super::types::PipelineSummary;
use crate::error::Result;

impl ApiClient {
    /// Fetch the experiment summaries for a project.
    pub async fn fetch_experiments(&self, project_id: u64) -> Result<Vec<PipelineSummary>> {
        let experiments: Vec<PipelineSummary> = self
            .get_json(&format!("/api/v1/projects/{project_id}/experiments"))
            .await?;

        info!(
            "Fetched {} experiments for project {project_id}",
            experiments.len()
        );

        Ok(experiments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::PipelineKind;
    use std::time::Duration;

    #[tokio::test]
    async fn test_fetch_experiments_decodes_summaries() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/projects/12/experiments")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[ { "id": 9, "name": "resnet-sweep", "pipeline_type": "EXPERIMENT" } ]"#)
            .create_async()
            .await;

        let client =
            ApiClient::new(&server.url(), None, Duration::from_secs(5)).unwrap();
        let experiments = client.fetch_experiments(12).await.unwrap();

        mock.assert_async().await;
        assert_eq!(experiments.len(), 1);
        assert_eq!(experiments[0].kind, PipelineKind::Experiment);
    }
}
