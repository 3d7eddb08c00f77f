use log::info;
use serde_json::json;

use super::client::ApiClient;
use super::types::Branch;
use crate::error::Result;

impl ApiClient {
    /// Fetch all branches of the project repository, system-generated ones
    /// included. Filtering for display happens in the view layer.
    pub async fn fetch_branches(&self, project_id: u64) -> Result<Vec<Branch>> {
        let branches: Vec<Branch> = self
            .get_json(&format!(
                "/api/v1/projects/{project_id}/repository/branches"
            ))
            .await?;

        info!("Fetched {} branches for project {project_id}", branches.len());

        Ok(branches)
    }

    /// Create a branch from a source ref. Callers validate the name first.
    pub async fn create_branch(
        &self,
        project_id: u64,
        name: &str,
        source: &str,
    ) -> Result<Branch> {
        let body = json!({ "branch": name, "ref": source });

        let branch: Branch = self
            .post_json(
                &format!("/api/v1/projects/{project_id}/repository/branches"),
                &body,
            )
            .await?;

        info!("Created branch {} in project {project_id}", branch.name);

        Ok(branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_fetch_branches_decodes_names() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/projects/12/repository/branches")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[ { "name": "master" }, { "name": "experiment/42/output-a" } ]"#)
            .create_async()
            .await;

        let client =
            ApiClient::new(&server.url(), None, Duration::from_secs(5)).unwrap();
        let branches = client.fetch_branches(12).await.unwrap();

        mock.assert_async().await;
        assert_eq!(branches.len(), 2);
        assert_eq!(branches[0].name, "master");
    }

    #[tokio::test]
    async fn test_create_branch_posts_name_and_ref() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/projects/12/repository/branches")
            .match_body(mockito::Matcher::Json(
                serde_json::json!({ "branch": "feature/tuning", "ref": "master" }),
            ))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{ "name": "feature/tuning" }"#)
            .create_async()
            .await;

        let client =
            ApiClient::new(&server.url(), None, Duration::from_secs(5)).unwrap();
        let branch = client
            .create_branch(12, "feature/tuning", "master")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(branch.name, "feature/tuning");
    }
}
