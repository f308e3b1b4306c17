//! 分類ロジック（CLI/ダッシュボード共通）
//!
//! モデルレスポンスの正規化と、感情ラベルの集計

use crate::parser::ModelReply;
use crate::prompts::CATEGORIES;
use crate::types::{Classification, ClassificationResult, Sentiment, SentimentCounts};

/// レスポンスにcategoryが無い場合の既定値。
/// 閉集合外のカテゴリもこの値に丸める
pub const DEFAULT_CATEGORY: &str = "Unknown";

/// レスポンスにsentimentが無い場合の既定値。
/// Positive/Negative/Neutral以外の値もこの値に丸める
pub const DEFAULT_SENTIMENT: &str = "Neutral";

/// 呼び出し失敗時にcategory/sentiment両方へ入れるセンチネル
pub const ERROR_LABEL: &str = "Error";

impl Classification {
    /// 呼び出し失敗時の分類
    pub fn error() -> Self {
        Self {
            category: ERROR_LABEL.to_string(),
            sentiment: ERROR_LABEL.to_string(),
        }
    }
}

/// カテゴリを正規表記に変換。閉集合外はNone
pub fn canonical_category(label: &str) -> Option<&'static str> {
    let label = label.trim();
    CATEGORIES
        .iter()
        .copied()
        .find(|c| c.eq_ignore_ascii_case(label))
}

/// 感情ラベルを正規表記に変換。3ラベル以外はNone
pub fn canonical_sentiment(label: &str) -> Option<&'static str> {
    Sentiment::from_label(label)
        .filter(|s| *s != Sentiment::Error)
        .map(|s| s.label())
}

/// モデルレスポンスを分類に正規化
///
/// - Unparseable → category/sentimentともに "Error"
/// - category欠落・閉集合外 → DEFAULT_CATEGORY
/// - sentiment欠落・3ラベル外 → DEFAULT_SENTIMENT
pub fn normalize_reply(reply: &ModelReply) -> Classification {
    match reply {
        ModelReply::Unparseable(_) => Classification::error(),
        ModelReply::Structured(payload) => {
            let category = payload
                .category
                .as_deref()
                .and_then(canonical_category)
                .unwrap_or(DEFAULT_CATEGORY);
            let sentiment = payload
                .sentiment
                .as_deref()
                .and_then(canonical_sentiment)
                .unwrap_or(DEFAULT_SENTIMENT);

            Classification {
                category: category.to_string(),
                sentiment: sentiment.to_string(),
            }
        }
    }
}

/// 感情ラベルを集計
///
/// 3ラベル以外（"Error"を含む）はNeutralに加算する
pub fn count_sentiments(results: &[ClassificationResult]) -> SentimentCounts {
    let mut counts = SentimentCounts::default();

    for r in results {
        match r.sentiment_kind() {
            Some(Sentiment::Positive) => counts.positive += 1,
            Some(Sentiment::Negative) => counts.negative += 1,
            _ => counts.neutral += 1,
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ClassifyPayload;

    fn structured(category: Option<&str>, sentiment: Option<&str>) -> ModelReply {
        ModelReply::Structured(ClassifyPayload {
            category: category.map(String::from),
            sentiment: sentiment.map(String::from),
        })
    }

    fn row(id: u32, sentiment: &str) -> ClassificationResult {
        ClassificationResult {
            id,
            text: format!("comment {}", id),
            category: "Other".to_string(),
            sentiment: sentiment.to_string(),
        }
    }

    #[test]
    fn test_normalize_full_payload() {
        let c = normalize_reply(&structured(Some("Course Content"), Some("Positive")));
        assert_eq!(c.category, "Course Content");
        assert_eq!(c.sentiment, "Positive");
    }

    #[test]
    fn test_normalize_missing_sentiment_defaults_to_neutral() {
        let c = normalize_reply(&structured(Some("Homework"), None));
        assert_eq!(c.category, "Homework");
        assert_eq!(c.sentiment, DEFAULT_SENTIMENT);
    }

    #[test]
    fn test_normalize_missing_category_defaults_to_unknown() {
        let c = normalize_reply(&structured(None, Some("Negative")));
        assert_eq!(c.category, DEFAULT_CATEGORY);
        assert_eq!(c.sentiment, "Negative");
    }

    #[test]
    fn test_normalize_canonicalizes_case() {
        let c = normalize_reply(&structured(Some("grading & exams"), Some(" positive")));
        assert_eq!(c.category, "Grading & Exams");
        assert_eq!(c.sentiment, "Positive");
    }

    #[test]
    fn test_normalize_out_of_set_labels() {
        let c = normalize_reply(&structured(Some("Cafeteria"), Some("Mixed")));
        assert_eq!(c.category, DEFAULT_CATEGORY);
        assert_eq!(c.sentiment, DEFAULT_SENTIMENT);
    }

    #[test]
    fn test_normalize_model_cannot_claim_error() {
        // モデルが "Error" を返しても失敗扱いにはしない
        let c = normalize_reply(&structured(Some("Error"), Some("Error")));
        assert_eq!(c.category, DEFAULT_CATEGORY);
        assert_eq!(c.sentiment, DEFAULT_SENTIMENT);
    }

    #[test]
    fn test_normalize_unparseable() {
        let c = normalize_reply(&ModelReply::Unparseable("bad".into()));
        assert_eq!(c, Classification::error());
    }

    #[test]
    fn test_count_sentiments() {
        let results = vec![row(1, "Positive"), row(2, "Negative"), row(3, "Positive")];
        let counts = count_sentiments(&results);
        assert_eq!(counts, SentimentCounts { positive: 2, negative: 1, neutral: 0 });
    }

    #[test]
    fn test_count_sentiments_folds_unknown_into_neutral() {
        let results = vec![row(1, "Error"), row(2, "Angry"), row(3, "Neutral")];
        let counts = count_sentiments(&results);
        assert_eq!(counts.neutral, 3);
        assert_eq!(counts.total(), results.len());
    }

    #[test]
    fn test_count_sentiments_empty() {
        assert_eq!(count_sentiments(&[]), SentimentCounts::default());
    }
}
