//! プロンプト生成モジュール
//!
//! CLIとダッシュボードで共有されるプロンプト生成ロジック:
//! - CATEGORIES: 分類カテゴリの定数
//! - build_classify_prompt: 1件のコメント分類用プロンプト

use crate::types::Sentiment;

/// 分類カテゴリ（閉集合）
pub const CATEGORIES: &[&str] = &[
    "Lecturer/Professor",
    "Homework",
    "Course Content",
    "Facilities",
    "Grading & Exams",
    "Project",
    "Schedule",
    "Other",
];

/// 分類プロンプト生成
///
/// # Arguments
/// * `text` - 分類対象のコメント
///
/// # Returns
/// categoryとsentimentの2フィールドのみのJSONを要求するプロンプト文字列
pub fn build_classify_prompt(text: &str) -> String {
    let categories = CATEGORIES
        .iter()
        .map(|c| format!("\"{}\"", c))
        .collect::<Vec<_>>()
        .join(", ");

    let sentiments = Sentiment::CHOICES
        .iter()
        .map(|s| format!("\"{}\"", s.label()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"You are classifying student course feedback.

## Categories
Choose exactly one of: {categories}

## Sentiment
Choose exactly one of: {sentiments}

## Output format (strict)
Return ONLY a valid JSON object with exactly these two fields:
{{"category": "...", "sentiment": "..."}}
No explanation, no extra fields, no surrounding text.

Feedback:
"""{text}""""#
    )
}
