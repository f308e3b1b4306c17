use crate::ai_provider::AiProvider;
use crate::error::{FeedbackAiError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    /// 未指定ならプロバイダ既定のモデル
    pub model: Option<String>,
    /// APIのベースURL（テスト・プロキシ用）
    pub base_url: Option<String>,
    /// API呼び出し間の待機時間（レート制限対策）
    pub request_delay_ms: u64,
    pub timeout_seconds: u64,
    /// 分類結果JSONの保存先
    pub store_path: PathBuf,
    pub bind_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FeedbackAiError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("feedback-ai").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            api_key: None,
            model: None,
            base_url: None,
            request_delay_ms: 1000,
            timeout_seconds: 60,
            store_path: PathBuf::from("data.json"),
            bind_addr: "127.0.0.1:5000".into(),
        }
    }

    pub fn get_api_key(&self, provider: AiProvider) -> Result<String> {
        // 環境変数を優先
        self.resolve_api_key(std::env::var(provider.api_key_env()).ok(), provider)
    }

    fn resolve_api_key(&self, env_key: Option<String>, provider: AiProvider) -> Result<String> {
        env_key
            .into_iter()
            .chain(self.api_key.clone())
            .map(|k| k.trim().to_string())
            .find(|k| !k.is_empty())
            .ok_or(FeedbackAiError::MissingApiKey(provider.api_key_env()))
    }

    pub fn model_for(&self, provider: AiProvider) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| provider.default_model().to_string())
    }

    pub fn base_url_for(&self, provider: AiProvider) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| provider.default_base_url().to_string())
            .trim_end_matches('/')
            .to_string()
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.request_delay(), Duration::from_secs(1));
        assert_eq!(config.store_path, PathBuf::from("data.json"));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config.request_delay_ms, 1000);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.model = Some("mistral-large-latest".into());
        config.request_delay_ms = 250;
        config.save_to(&path).expect("設定保存失敗");

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.model.as_deref(), Some("mistral-large-latest"));
        assert_eq!(loaded.request_delay_ms, 250);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"api_key": "abc"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.timeout_seconds, 60);
        assert_eq!(config.bind_addr, "127.0.0.1:5000");
    }

    #[test]
    fn test_resolve_api_key_prefers_env() {
        let mut config = Config::default();
        config.api_key = Some("from-file".into());
        let key = config
            .resolve_api_key(Some("from-env".into()), AiProvider::Mistral)
            .unwrap();
        assert_eq!(key, "from-env");
    }

    #[test]
    fn test_resolve_api_key_falls_back_to_file() {
        let mut config = Config::default();
        config.api_key = Some("from-file".into());
        let key = config.resolve_api_key(Some("  ".into()), AiProvider::Mistral).unwrap();
        assert_eq!(key, "from-file");
    }

    #[test]
    fn test_resolve_api_key_missing() {
        let config = Config::default();
        let err = config.resolve_api_key(None, AiProvider::Gemini).unwrap_err();
        assert!(matches!(err, FeedbackAiError::MissingApiKey("GEMINI_API_KEY")));
    }

    #[test]
    fn test_model_and_base_url_for_provider() {
        let mut config = Config::default();
        assert_eq!(config.model_for(AiProvider::Mistral), "mistral-small-latest");
        assert_eq!(config.base_url_for(AiProvider::Gemini), "https://generativelanguage.googleapis.com");

        config.base_url = Some("http://127.0.0.1:9999/".into());
        assert_eq!(config.base_url_for(AiProvider::Mistral), "http://127.0.0.1:9999");
    }
}
