//! APIレスポンスパーサー
//!
//! モデルのレスポンスからJSONオブジェクトを抽出し、
//! category/sentimentの2フィールドを持つタグ付き結果に変換する

use crate::error::{Error, Result};
use serde::Deserialize;

/// 構造化レスポンスの中身（各フィールドは欠落しうる）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassifyPayload {
    pub category: Option<String>,
    pub sentiment: Option<String>,
}

/// モデルレスポンスのパース結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelReply {
    /// JSONオブジェクトとして解釈できた
    Structured(ClassifyPayload),
    /// JSONが見つからない・壊れている
    Unparseable(String),
}

/// APIレスポンスからJSONオブジェクト部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 生の {...} オブジェクト（最初の `{` から最後の `}` まで）
/// 3. エラー
///
/// # Examples
/// ```
/// use feedback_ai_common::extract_json;
///
/// let response = "Result: {\"category\": \"Homework\"}";
/// let json = extract_json(response).unwrap();
/// assert_eq!(json, "{\"category\": \"Homework\"}");
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    // ```json ... ``` ブロックを探す
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // "```json" の長さ
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // 生の {...} を探す
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("JSONが見つかりません".into()))
}

/// 分類レスポンスをパース
///
/// 失敗してもエラーにはせず `ModelReply::Unparseable` を返す
pub fn parse_classify_response(response: &str) -> ModelReply {
    let json_str = match extract_json(response) {
        Ok(s) => s,
        Err(e) => return ModelReply::Unparseable(e.to_string()),
    };

    match serde_json::from_str::<ClassifyPayload>(json_str.trim()) {
        Ok(payload) => ModelReply::Structured(payload),
        Err(e) => ModelReply::Unparseable(format!("分類JSONパースエラー: {}", e)),
    }
}
