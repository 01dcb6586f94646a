use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::platform::{ACCEPT_JSON, ApiResponse, Platform};

/// REST client for the GitHub API.
#[derive(Clone)]
pub struct GithubClient {
    token: Arc<String>,
    base_url: Arc<String>,
    user_agent: Arc<String>,
    http: Arc<Client>,
}

impl GithubClient {
    /// Create a client that authenticates every request with `token`.
    pub fn new(token: impl Into<String>, settings: &Settings) -> Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self {
            token: Arc::new(token.into()),
            base_url: Arc::new(settings.api_base.trim_end_matches('/').to_string()),
            user_agent: Arc::new(settings.user_agent.clone()),
            http: Arc::new(http),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

impl Platform for GithubClient {
    /// Single attempt, no retry. Non-2xx bodies that are not JSON become `Null`.
    async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        accept: Option<&str>,
    ) -> Result<ApiResponse> {
        let resp = self
            .http
            .get(self.url(endpoint))
            .query(params)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, accept.unwrap_or(ACCEPT_JSON))
            .header(USER_AGENT, self.user_agent.as_str())
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        debug!(endpoint, status = status.as_u16(), bytes = text.len(), "GitHub response");

        let body = match serde_json::from_str::<Value>(&text) {
            Ok(json) => json,
            Err(source) if status.is_success() => {
                return Err(Error::Decode {
                    context: format!("response from {endpoint}"),
                    source,
                });
            }
            Err(_) => Value::Null,
        };

        Ok(ApiResponse::new(status.as_u16(), body))
    }
}
