use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::auth::Token;
use crate::error::{MlboardError, Result};

/// HTTP client for the platform API gateway.
///
/// Failures are terminal for the triggering fetch chain: there is no
/// automatic retry or backoff, the caller surfaces a notice and the user
/// navigates again to retry.
pub struct ApiClient {
    client: Client,
    base_url: Url,
    token: Option<Token>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<Token>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("mlboard/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| MlboardError::Config(format!("Failed to create HTTP client: {e}")))?;

        let base_url = Url::parse(base_url)
            .map_err(|e| MlboardError::Config(format!("Invalid gateway URL: {e}")))?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| MlboardError::Config(format!("Invalid endpoint path {path}: {e}")))
    }

    fn auth_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(token) = &self.token {
            request.bearer_auth(token.as_str())
        } else {
            request
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(MlboardError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    pub(crate) async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("GET {url}");

        let response = self.auth_request(self.client.get(url)).send().await?;
        let response = Self::check_status(response).await?;

        Ok(response.json().await?)
    }

    /// Fetch a raw binary payload. Non-success statuses reject, which
    /// terminates the calling fetch chain.
    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.endpoint(path)?;
        debug!("GET {url} (binary)");

        let response = self.auth_request(self.client.get(url)).send().await?;
        let response = Self::check_status(response).await?;

        Ok(response.bytes().await?.to_vec())
    }

    pub(crate) async fn post_json<T>(&self, path: &str, body: &serde_json::Value) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("POST {url}");

        let response = self
            .auth_request(self.client.post(url).json(body))
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_json_maps_error_statuses() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/projects/1/pipelines")
            .with_status(404)
            .with_body("project not found")
            .create_async()
            .await;

        let client =
            ApiClient::new(&server.url(), None, Duration::from_secs(5)).unwrap();
        let result: Result<Vec<serde_json::Value>> =
            client.get_json("/api/v1/projects/1/pipelines").await;

        mock.assert_async().await;
        match result {
            Err(MlboardError::Api { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "project not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_bytes_passes_payload_through() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/projects/1/jobs/2/trace")
            .with_status(200)
            .with_body(b"raw log bytes")
            .create_async()
            .await;

        let client =
            ApiClient::new(&server.url(), None, Duration::from_secs(5)).unwrap();
        let bytes = client
            .get_bytes("/api/v1/projects/1/jobs/2/trace")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(bytes, b"raw log bytes");
    }

    #[tokio::test]
    async fn test_bearer_token_is_attached() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/projects/1/pipelines")
            .match_header("authorization", "Bearer secret")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = ApiClient::new(
            &server.url(),
            Some(Token::from("secret")),
            Duration::from_secs(5),
        )
        .unwrap();
        let result: Vec<serde_json::Value> = client
            .get_json("/api/v1/projects/1/pipelines")
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(result.is_empty());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = ApiClient::new("not a url", None, Duration::from_secs(5));
        assert!(matches!(result, Err(MlboardError::Config(_))));
    }
}
