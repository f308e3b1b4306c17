//! テスト用のモデルクライアント

#![allow(dead_code)]

use async_trait::async_trait;
use feedback_ai_rust::analyzer::ModelClient;
use feedback_ai_rust::error::{FeedbackAiError, Result};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// 事前に決めた応答を順番に返すクライアント
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn new(replies: Vec<Result<String>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// すべて同じ応答を返す
    pub fn repeating(reply: &str, times: usize) -> Arc<Self> {
        Self::new((0..times).map(|_| Ok(reply.to_string())).collect())
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for ScriptedClient {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FeedbackAiError::ApiCall("no scripted reply".into())))
    }
}

pub fn ok(json: &str) -> Result<String> {
    Ok(json.to_string())
}

pub fn transport_error() -> Result<String> {
    Err(FeedbackAiError::ApiCall("connection refused".into()))
}

pub fn comments(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
