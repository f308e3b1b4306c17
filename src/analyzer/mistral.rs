//! Mistral Chat Completions API連携
//!
//! `response_format: json_object` でJSONのみを返させる

use super::client::{ensure_success, ModelClient};
use crate::error::{FeedbackAiError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Chat Completionsリクエスト
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Chat Completionsレスポンス
#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct MistralClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl MistralClient {
    pub fn new(http: reqwest::Client, api_key: String, model: String, base_url: String) -> Self {
        Self { http, api_key, model, base_url }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ModelClient for MistralClient {
    fn name(&self) -> &str {
        "mistral"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage { role: "user", content: prompt }],
            response_format: ResponseFormat { kind: "json_object" },
            temperature: 0.1,
        };

        debug!(model = %self.model, "Mistral API呼び出し");

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| FeedbackAiError::ApiCall(e.without_url().to_string()))?;

        let response = ensure_success(response).await?;

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| FeedbackAiError::ApiParse(e.without_url().to_string()))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| FeedbackAiError::ApiParse("Empty response".into()))
    }
}
