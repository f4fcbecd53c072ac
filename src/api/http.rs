use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};

use crate::config::Config;
use crate::domain::{ApiError, Task};

use super::{TaskApi, TaskPatch};

/// REST adapter for the hosted task backend.
///
/// `GET {base}/tasks` lists the collection; `PATCH {base}/tasks/{id}`
/// applies a partial update. Transport failures map to
/// [`ApiError::Unreachable`], non-success responses to [`ApiError::Rejected`].
pub struct HttpTaskApi {
    http_client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl HttpTaskApi {
    pub fn new(
        http_client: reqwest::Client,
        base_url: String,
        api_token: Option<String>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self::new(
            http_client,
            config.api_base_url.clone(),
            config.api_token.clone(),
        ))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn rejection(status: StatusCode, response: reqwest::Response) -> ApiError {
        let body = response.text().await.unwrap_or_default();
        let snippet: String = body.chars().take(200).collect();
        ApiError::Rejected(format!("backend returned {}: {}", status, snippet))
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list(&self) -> Result<Vec<Task>, ApiError> {
        let response = self
            .authorized(self.http_client.get(format!("{}/tasks", self.base_url)))
            .send()
            .await
            .map_err(|err| ApiError::Unreachable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::rejection(status, response).await);
        }

        response
            .json::<Vec<Task>>()
            .await
            .map_err(|err| ApiError::Rejected(format!("failed to decode task list: {}", err)))
    }

    async fn update(&self, id: &str, patch: &TaskPatch) -> Result<Task, ApiError> {
        let response = self
            .authorized(
                self.http_client
                    .patch(format!("{}/tasks/{}", self.base_url, id))
                    .json(patch),
            )
            .send()
            .await
            .map_err(|err| ApiError::Unreachable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::rejection(status, response).await);
        }

        response
            .json::<Task>()
            .await
            .map_err(|err| ApiError::Rejected(format!("failed to decode task: {}", err)))
    }
}
