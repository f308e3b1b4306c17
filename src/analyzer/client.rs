//! モデルAPIクライアント
//!
//! プロバイダごとの実装（Mistral/Gemini）を `ModelClient` で抽象化する

use super::{gemini::GeminiClient, mistral::MistralClient};
use crate::ai_provider::AiProvider;
use crate::config::Config;
use crate::error::{FeedbackAiError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// プロンプトを送り、構造化（JSON）モードの応答本文を返すクライアント
#[async_trait]
pub trait ModelClient: Send + Sync {
    fn name(&self) -> &str;

    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// バッチ実行ごとにクライアントを生成する関数
pub type ClientFactory = Arc<dyn Fn() -> Result<Arc<dyn ModelClient>> + Send + Sync>;

/// 設定からクライアントを生成
///
/// APIキーが無い場合はネットワークに触れる前に `MissingApiKey` を返す
pub fn build_client(config: &Config, provider: AiProvider) -> Result<Arc<dyn ModelClient>> {
    let api_key = config.get_api_key(provider)?;
    let model = config.model_for(provider);
    let base_url = config.base_url_for(provider);

    let http = reqwest::Client::builder()
        .timeout(config.timeout())
        .build()
        .map_err(|e| FeedbackAiError::ApiCall(format!("HTTPクライアント生成エラー: {}", e)))?;

    let client: Arc<dyn ModelClient> = match provider {
        AiProvider::Mistral => Arc::new(MistralClient::new(http, api_key, model, base_url)),
        AiProvider::Gemini => Arc::new(GeminiClient::new(http, api_key, model, base_url)),
    };
    Ok(client)
}

/// 設定を保持し、呼ばれるたびに `build_client` するファクトリ
pub fn client_factory(config: Config, provider: AiProvider) -> ClientFactory {
    Arc::new(move || build_client(&config, provider))
}

/// 非2xxレスポンスをエラーに変換
pub(crate) async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let preview: String = body.chars().take(200).collect();
    Err(FeedbackAiError::ApiCall(format!("status {}: {}", status, preview)))
}
