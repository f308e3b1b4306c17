//! HTTPサーバー
//!
//! - `GET /`    現在の保存内容を描画
//! - `GET /run` バッチ実行後に描画

use super::AppState;
use crate::error::{FeedbackAiError, Result};
use axum::{extract::State, response::Html, routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/run", get(run_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(addr: &str, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| FeedbackAiError::Server(format!("{} にバインドできません: {}", addr, e)))?;

    info!("Dashboard running on http://{}", addr);

    axum::serve(listener, build_router(state))
        .await
        .map_err(|e| FeedbackAiError::Server(e.to_string()))
}

async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(state.render().await.to_html())
}

async fn run_handler(State(state): State<AppState>) -> Html<String> {
    Html(state.trigger_and_render().await.to_html())
}
