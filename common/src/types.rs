//! 分類結果の型定義
//!
//! CLIとダッシュボードで共有される型:
//! - Classification: 1件のコメントに対する正規化済み分類
//! - ClassificationResult: 永続化される1行（id付き）
//! - SentimentCounts: 描画時に集計される感情ラベルの件数

use serde::{Deserialize, Serialize};

/// 感情ラベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    /// 呼び出し失敗時のセンチネル
    Error,
}

impl Sentiment {
    /// モデルに選ばせる3ラベル（Errorは含まない）
    pub const CHOICES: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
            Sentiment::Error => "Error",
        }
    }

    /// テーブルの並べ替えに使う数値ランク
    pub fn rank(&self) -> u8 {
        match self {
            Sentiment::Positive => 3,
            Sentiment::Neutral => 2,
            Sentiment::Negative => 1,
            Sentiment::Error => 0,
        }
    }

    /// ラベル文字列から変換（前後空白・大文字小文字を無視）
    pub fn from_label(label: &str) -> Option<Sentiment> {
        let label = label.trim();
        [
            Sentiment::Positive,
            Sentiment::Negative,
            Sentiment::Neutral,
            Sentiment::Error,
        ]
        .into_iter()
        .find(|s| s.label().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 1件のコメントに対する分類（正規化済み）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: String,
    pub sentiment: String,
}

/// 永続化される分類結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// 入力順の連番（1始まり）
    pub id: u32,

    /// 元コメント
    pub text: String,

    #[serde(default = "default_category")]
    pub category: String,

    #[serde(default = "default_sentiment")]
    pub sentiment: String,
}

fn default_category() -> String {
    crate::analyzer::DEFAULT_CATEGORY.to_string()
}

fn default_sentiment() -> String {
    crate::analyzer::DEFAULT_SENTIMENT.to_string()
}

impl ClassificationResult {
    pub fn new(id: u32, text: impl Into<String>, classification: Classification) -> Self {
        Self {
            id,
            text: text.into(),
            category: classification.category,
            sentiment: classification.sentiment,
        }
    }

    /// 感情ラベルを型付きで取得。未知の値はNone
    pub fn sentiment_kind(&self) -> Option<Sentiment> {
        Sentiment::from_label(&self.sentiment)
    }
}

/// 感情ラベルごとの件数（チャート用）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    #[serde(rename = "Positive")]
    pub positive: usize,
    #[serde(rename = "Negative")]
    pub negative: usize,
    #[serde(rename = "Neutral")]
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
            Sentiment::Error => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_from_label() {
        assert_eq!(Sentiment::from_label("Positive"), Some(Sentiment::Positive));
        assert_eq!(Sentiment::from_label(" negative "), Some(Sentiment::Negative));
        assert_eq!(Sentiment::from_label("NEUTRAL"), Some(Sentiment::Neutral));
        assert_eq!(Sentiment::from_label("Error"), Some(Sentiment::Error));
        assert_eq!(Sentiment::from_label("Mixed"), None);
        assert_eq!(Sentiment::from_label(""), None);
    }

    #[test]
    fn test_sentiment_rank_order() {
        assert!(Sentiment::Positive.rank() > Sentiment::Neutral.rank());
        assert!(Sentiment::Neutral.rank() > Sentiment::Negative.rank());
        assert!(Sentiment::Negative.rank() > Sentiment::Error.rank());
    }

    #[test]
    fn test_result_deserialize_missing_labels() {
        let json = r#"{"id": 3, "text": "hello"}"#;
        let result: ClassificationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.id, 3);
        assert_eq!(result.category, "Unknown");
        assert_eq!(result.sentiment, "Neutral");
    }

    #[test]
    fn test_result_serialize_keys() {
        let result = ClassificationResult::new(
            1,
            "Great class!",
            Classification {
                category: "Course Content".to_string(),
                sentiment: "Positive".to_string(),
            },
        );
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["text"], "Great class!");
        assert_eq!(value["category"], "Course Content");
        assert_eq!(value["sentiment"], "Positive");
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_counts_serialize_as_labels() {
        let counts = SentimentCounts { positive: 2, negative: 1, neutral: 0 };
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"Positive":2,"Negative":1,"Neutral":0}"#);
        assert_eq!(counts.total(), 3);
    }
}
