//! 結果ファイルのテスト
//!
//! 読み込み失敗時の扱いと、置き換え書き込みを検証

use feedback_ai_common::ClassificationResult;
use feedback_ai_rust::error::FeedbackAiError;
use feedback_ai_rust::store::ResultStore;
use tempfile::tempdir;

fn result(id: u32, sentiment: &str) -> ClassificationResult {
    ClassificationResult {
        id,
        text: format!("comment {}", id),
        category: "Course Content".to_string(),
        sentiment: sentiment.to_string(),
    }
}

/// ファイルが無い場合は空
#[test]
fn test_load_absent_store() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = ResultStore::new(dir.path().join("data.json"));

    assert!(!store.exists());
    assert!(store.load().is_empty());
    assert!(store.try_load().unwrap().is_none());
    assert!(store.last_modified().is_none());
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = ResultStore::new(dir.path().join("data.json"));

    let results = vec![result(1, "Positive"), result(2, "Negative")];
    store.save(&results).expect("保存失敗");

    assert_eq!(store.load(), results);
    assert!(store.last_modified().is_some());
}

/// 保存形式はid/text/category/sentimentの配列
#[test]
fn test_saved_document_shape() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = ResultStore::new(dir.path().join("data.json"));
    store.save(&[result(1, "Neutral")]).unwrap();

    let content = std::fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let rows = value.as_array().expect("配列ではない");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], 1);
    assert_eq!(rows[0]["text"], "comment 1");
    assert_eq!(rows[0]["category"], "Course Content");
    assert_eq!(rows[0]["sentiment"], "Neutral");
}

/// 一時ファイルが残らない
#[test]
fn test_save_leaves_no_temp_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = ResultStore::new(dir.path().join("data.json"));
    store.save(&[result(1, "Positive")]).unwrap();
    store.save(&[result(1, "Negative")]).unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["data.json".to_string()]);
}

/// 上書きは丸ごと置き換え（追記しない）
#[test]
fn test_save_overwrites() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = ResultStore::new(dir.path().join("data.json"));

    store.save(&[result(1, "Positive"), result(2, "Positive"), result(3, "Positive")]).unwrap();
    store.save(&[result(1, "Negative")]).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].sentiment, "Negative");
}

/// 壊れたファイルは空として扱う
#[test]
fn test_corrupted_store_is_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("data.json");
    std::fs::write(&path, "[{ invalid json").unwrap();

    let store = ResultStore::new(&path);
    assert!(store.load().is_empty());
    assert!(store.try_load().is_err());
}

/// 欠けたフィールドは既定値で読む
#[test]
fn test_load_fills_missing_labels() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("data.json");
    std::fs::write(&path, r#"[{"id": 1, "text": "hi"}]"#).unwrap();

    let loaded = ResultStore::new(&path).load();
    assert_eq!(loaded[0].category, "Unknown");
    assert_eq!(loaded[0].sentiment, "Neutral");
}

/// ブロッキング用スレッド経由の保存
#[tokio::test(flavor = "current_thread")]
async fn test_save_blocking_persists_and_returns_results() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = ResultStore::new(dir.path().join("data.json"));
    let results = vec![result(1, "Positive"), result(2, "Neutral")];

    let saved = store.save_blocking(results.clone()).await.unwrap();

    assert_eq!(saved, results);
    assert_eq!(store.load(), results);
}

/// ブロッキング用スレッド経由でも書き込み失敗はStoreWrite
#[tokio::test(flavor = "current_thread")]
async fn test_save_blocking_reports_write_failure() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = ResultStore::new(dir.path().join("missing").join("data.json"));

    let err = store.save_blocking(vec![result(1, "Positive")]).await.unwrap_err();
    assert!(matches!(err, FeedbackAiError::StoreWrite { .. }));
}
