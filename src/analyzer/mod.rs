//! 分類パイプライン
//!
//! コメントを1件ずつ順番にモデルへ送り、結果を正規化して保存する。
//! 呼び出し間には固定の待機を入れる（レート制限対策）。

pub mod client;
mod gemini;
mod mistral;

pub use client::{build_client, client_factory, ClientFactory, ModelClient};
pub use feedback_ai_common::{Classification, ClassificationResult};

use crate::ai_provider::AiProvider;
use crate::config::Config;
use crate::error::Result;
use crate::store::ResultStore;
use feedback_ai_common::{build_classify_prompt, normalize_reply, parse_classify_response, ModelReply};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

const PREVIEW_CHARS: usize = 30;

fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}

pub struct BatchRunner {
    client: Arc<dyn ModelClient>,
    delay: Duration,
    show_progress: bool,
}

impl BatchRunner {
    pub fn new(client: Arc<dyn ModelClient>, delay: Duration) -> Self {
        Self {
            client,
            delay,
            show_progress: false,
        }
    }

    /// ターミナルにプログレスバーを表示する
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// 1件のコメントを分類
    ///
    /// 呼び出し・パースの失敗は呼び出し元に返さず、
    /// category/sentimentとも "Error" の分類として返す
    pub async fn classify(&self, text: &str) -> Classification {
        let prompt = build_classify_prompt(text);

        match self.client.complete(&prompt).await {
            Ok(response) => {
                let reply = parse_classify_response(&response);
                if let ModelReply::Unparseable(reason) = &reply {
                    warn!(client = self.client.name(), comment = %preview(text), %reason, "レスポンスを解釈できません");
                }
                normalize_reply(&reply)
            }
            Err(e) => {
                warn!(client = self.client.name(), comment = %preview(text), error = %e, "分類に失敗");
                Classification::error()
            }
        }
    }

    /// 全コメントを入力順に分類（保存はしない）
    ///
    /// 結果は常に入力と同じ件数で、idは1から連番
    pub async fn classify_all(&self, comments: &[String]) -> Vec<ClassificationResult> {
        let total = comments.len();
        let progress = if self.show_progress {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(
                ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=> "),
            );
            bar
        } else {
            ProgressBar::hidden()
        };

        let mut results = Vec::with_capacity(total);

        for (i, comment) in comments.iter().enumerate() {
            let short = preview(comment);
            info!("Processing {}/{}: {}...", i + 1, total, short);
            progress.set_message(short);

            let classification = self.classify(comment).await;
            results.push(ClassificationResult::new((i + 1) as u32, comment.as_str(), classification));
            progress.inc(1);

            // 最後の呼び出しの後は待たない
            if i + 1 < total && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        progress.finish_and_clear();
        results
    }

    /// 全件分類して保存先を丸ごと置き換える
    pub async fn run_batch(
        &self,
        comments: &[String],
        store: &ResultStore,
    ) -> Result<Vec<ClassificationResult>> {
        let results = self.classify_all(comments).await;
        let results = store.save_blocking(results).await?;
        info!("分類完了: {}件 → {}", results.len(), store.path().display());
        Ok(results)
    }
}

/// 設定からクライアントを作って1バッチ実行
///
/// APIキーが無い場合は1件も呼び出さずにエラーを返し、保存もしない
pub async fn analyze_all(
    config: &Config,
    provider: AiProvider,
    comments: &[String],
    store: &ResultStore,
) -> Result<Vec<ClassificationResult>> {
    let client = build_client(config, provider)?;
    BatchRunner::new(client, config.request_delay())
        .run_batch(comments, store)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_by_chars() {
        assert_eq!(preview("short"), "short");
        let long = "あ".repeat(40);
        assert_eq!(preview(&long).chars().count(), PREVIEW_CHARS);
    }
}
