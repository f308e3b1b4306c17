//! ダッシュボード（表示サービス）
//!
//! 保存済みの結果セットを毎回読み直し、集計してHTMLを描画する。
//! `/run` はバッチを同期実行してから同じ描画を行う。

mod html;
pub mod server;

use crate::analyzer::{BatchRunner, ClientFactory};
use crate::store::ResultStore;
use chrono::{DateTime, Local};
use feedback_ai_common::{count_sentiments, ClassificationResult, SentimentCounts};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{error, warn};

/// 描画に渡すデータ
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub results: Vec<ClassificationResult>,
    pub counts: SentimentCounts,
    pub updated_at: Option<DateTime<Local>>,
}

impl DashboardView {
    pub fn to_html(&self) -> String {
        html::render_page(self)
    }
}

/// 保存先を読み込んで描画データを作る。保存先が無ければ空
pub fn render_view(store: &ResultStore) -> DashboardView {
    let results = store.load();
    let counts = count_sentiments(&results);
    DashboardView {
        results,
        counts,
        updated_at: store.last_modified(),
    }
}

/// サーバーの共有状態
#[derive(Clone)]
pub struct AppState {
    store: Arc<ResultStore>,
    comments: Arc<Vec<String>>,
    factory: ClientFactory,
    delay: Duration,
    /// バッチ実行は同時に1つだけ
    run_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(
        store: ResultStore,
        comments: Vec<String>,
        factory: ClientFactory,
        delay: Duration,
    ) -> Self {
        Self {
            store: Arc::new(store),
            comments: Arc::new(comments),
            factory,
            delay,
            run_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    /// 保存先の読み込みはブロッキング用スレッドで行う
    pub async fn render(&self) -> DashboardView {
        let store = Arc::clone(&self.store);
        match tokio::task::spawn_blocking(move || render_view(&store)).await {
            Ok(view) => view,
            Err(e) => {
                error!(error = %e, "描画データの読み込みに失敗");
                DashboardView {
                    results: Vec::new(),
                    counts: SentimentCounts::default(),
                    updated_at: None,
                }
            }
        }
    }

    /// バッチを実行してから描画
    ///
    /// 失敗はログに残すだけで、描画は現在の保存内容で続行する
    pub async fn trigger_and_render(&self) -> DashboardView {
        {
            let _guard = self.run_lock.lock().await;

            match (self.factory)() {
                Ok(client) => {
                    let runner = BatchRunner::new(client, self.delay);
                    if let Err(e) = runner.run_batch(&self.comments, &self.store).await {
                        error!(error = %e, "バッチ実行に失敗");
                    }
                }
                Err(e) => warn!(error = %e, "バッチ実行を中止"),
            }
        }

        self.render().await
    }
}
