use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::business::dto::BusinessProfilePayload;

/// Outbound request body for the external recommendation service.
#[derive(Debug, Serialize)]
pub struct MlRequest {
    pub user_id: String,
    pub business_profile: BusinessProfilePayload,
    pub include_dark_horse: bool,
    pub num_recommendations: u32,
}

impl MlRequest {
    pub fn new(user_id: Uuid, business_profile: BusinessProfilePayload) -> Self {
        Self {
            user_id: user_id.to_string(),
            business_profile,
            include_dark_horse: true,
            num_recommendations: 10,
        }
    }
}

/// Collaborator boundary for the ML service, a trait so tests can
/// substitute a failing or canned implementation.
#[async_trait]
pub trait RecommendationClient: Send + Sync {
    async fn fetch(&self, request: &MlRequest) -> anyhow::Result<Value>;
}

pub struct MlServiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl MlServiceClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build ml http client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl RecommendationClient for MlServiceClient {
    async fn fetch(&self, request: &MlRequest) -> anyhow::Result<Value> {
        let url = format!("{}/api/recommendations", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .context("ml service request failed")?
            .error_for_status()
            .context("ml service returned an error status")?;
        let body = response
            .json::<Value>()
            .await
            .context("ml service returned malformed json")?;
        Ok(body)
    }
}
