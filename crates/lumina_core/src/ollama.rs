//! Ollama completion backend.
//!
//! Thin client for the Ollama HTTP API. One model, non-streaming
//! generation, request-level timeout.

use std::time::Duration;

use crate::config::OllamaConfig;
use crate::error::CompletionError;

/// Contract every completion backend satisfies: prompt in, text out.
#[allow(async_fn_in_trait)]
pub trait CompletionBackend {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// Client for the Ollama HTTP API.
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl OllamaClient {
    pub fn new(config: &OllamaConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Check if Ollama answers at all.
    pub async fn is_available(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        self.client
            .get(&url)
            .timeout(Duration::from_secs(2))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }
}

impl CompletionBackend for OllamaClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let url = format!("{}/api/generate", self.base_url);

        let body = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false
        });

        let resp = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout { after: self.timeout }
                } else {
                    CompletionError::Connect(e)
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| CompletionError::Malformed(e.to_string()))?;

        json.get("response")
            .and_then(|r| r.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| CompletionError::Malformed("missing `response` field".to_string()))
    }
}
