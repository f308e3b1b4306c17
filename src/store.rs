//! 分類結果の保存先
//!
//! 1つのJSONファイルに結果セット全体を保存する。
//! 書き込みは同じディレクトリの一時ファイル経由でrenameし、
//! 読み手が書きかけのファイルを見ることはない。

use crate::error::{FeedbackAiError, Result};
use chrono::{DateTime, Local};
use feedback_ai_common::ClassificationResult;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct ResultStore {
    path: PathBuf,
}

impl ResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "data.json".to_string());
        self.path.with_file_name(format!(".{}.tmp", file_name))
    }

    /// 結果セットを読み込み。ファイルが無ければNone
    pub fn try_load(&self) -> Result<Option<Vec<ClassificationResult>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let results = serde_json::from_reader(reader)?;
        Ok(Some(results))
    }

    /// 結果セットを読み込み
    ///
    /// 存在しない・読めない・壊れている場合は空として扱う
    pub fn load(&self) -> Vec<ClassificationResult> {
        match self.try_load() {
            Ok(Some(results)) => results,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "結果ファイルを読み込めません。空として扱います");
                Vec::new()
            }
        }
    }

    /// 結果セットで丸ごと置き換える
    pub fn save(&self, results: &[ClassificationResult]) -> Result<()> {
        let temp_path = self.temp_path();

        let written = write_json(&temp_path, results)
            .and_then(|_| std::fs::rename(&temp_path, &self.path));

        if let Err(source) = written {
            let _ = std::fs::remove_file(&temp_path);
            return Err(FeedbackAiError::StoreWrite {
                path: self.path.display().to_string(),
                source,
            });
        }

        Ok(())
    }

    /// `save` をブロッキング用スレッドで実行し、保存した結果セットを返す
    pub async fn save_blocking(
        &self,
        results: Vec<ClassificationResult>,
    ) -> Result<Vec<ClassificationResult>> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.save(&results).map(|_| results))
            .await
            .map_err(|e| FeedbackAiError::Task(e.to_string()))?
    }

    /// 最終更新日時
    pub fn last_modified(&self) -> Option<DateTime<Local>> {
        let modified = std::fs::metadata(&self.path).ok()?.modified().ok()?;
        Some(DateTime::<Local>::from(modified))
    }
}

fn write_json(path: &Path, results: &[ClassificationResult]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, results)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}
