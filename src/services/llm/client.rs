//! LLM Client - shared HTTP plumbing for provider adapters
//!
//! Uses reqwest for the single outbound call each request makes. No retry,
//! no backoff.

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

use super::models::LLMError;

/// LLM HTTP Client
#[derive(Debug, Clone)]
pub struct LLMClient {
    http_client: Client,
    timeout_seconds: u64,
}

impl LLMClient {
    pub fn new(timeout_seconds: u64) -> Result<Self, LLMError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| LLMError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http_client, timeout_seconds })
    }

    /// POST a JSON body and decode a JSON response.
    ///
    /// Non-success HTTP statuses are returned as `LLMError::HttpStatus` with
    /// the response text; the body of a success response must decode as
    /// `Resp`.
    pub async fn post_json<Req, Resp>(
        &self,
        url: &str,
        headers: &[(&str, String)],
        body: &Req,
    ) -> Result<Resp, LLMError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let mut request = self
            .http_client
            .post(url)
            .header("Content-Type", "application/json")
            .json(body);
        for (name, value) in headers {
            request = request.header(*name, value);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                LLMError::Timeout(self.timeout_seconds)
            } else {
                LLMError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LLMError::HttpStatus { status: status.as_u16(), body: error_text });
        }

        response
            .json::<Resp>()
            .await
            .map_err(|e| LLMError::ParseError(format!("Invalid response body: {}", e)))
    }
}

/// Parse reply text as the scenario's structured result
pub fn parse_reply<T: DeserializeOwned>(text: &str) -> Result<T, LLMError> {
    if text.trim().is_empty() {
        return Err(LLMError::EmptyReply);
    }
    serde_json::from_str(text).map_err(|e| {
        LLMError::ParseError(format!("Failed to parse LLM response: {}. Content: {}", e, text))
    })
}
