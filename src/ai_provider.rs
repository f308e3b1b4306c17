use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Mistral,
    Gemini,
}

impl AiProvider {
    pub fn name(&self) -> &'static str {
        match self {
            AiProvider::Mistral => "mistral",
            AiProvider::Gemini => "gemini",
        }
    }

    /// APIキーを読む環境変数名
    pub fn api_key_env(&self) -> &'static str {
        match self {
            AiProvider::Mistral => "MISTRAL_API_KEY",
            AiProvider::Gemini => "GEMINI_API_KEY",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            AiProvider::Mistral => "mistral-small-latest",
            AiProvider::Gemini => "gemini-2.0-flash",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            AiProvider::Mistral => "https://api.mistral.ai",
            AiProvider::Gemini => "https://generativelanguage.googleapis.com",
        }
    }
}

impl std::fmt::Display for AiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
