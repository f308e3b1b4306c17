use clap::Parser;
use feedback_ai_common::{count_sentiments, Sentiment, ERROR_LABEL};
use feedback_ai_rust::{analyzer, cli, comments, config, dashboard, error, export, store};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::time::Duration;
use store::ResultStore;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;
    let provider = cli.ai_provider;

    match cli.command {
        Commands::Analyze { input, output, delay_ms, no_progress } => {
            println!("💬 feedback-ai - コメント分類\n");

            // 1. コメント読み込み
            println!("[1/2] コメントを読み込み中...");
            let comments = comments::load_comments(input.as_deref())?;
            println!("✔ {}件のコメント\n", comments.len());

            // 2. AI分類（APIキーが無ければここで中止）
            println!("[2/2] AI分類中... ({} / {})", provider, config.model_for(provider));
            let client = analyzer::build_client(&config, provider)?;
            let delay = delay_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.request_delay());
            let store = ResultStore::new(output.unwrap_or_else(|| config.store_path.clone()));

            let results = analyzer::BatchRunner::new(client, delay)
                .with_progress(!no_progress)
                .run_batch(&comments, &store)
                .await?;

            let counts = count_sentiments(&results);
            println!("✔ 結果を保存: {}", store.path().display());
            let summary = Sentiment::CHOICES
                .iter()
                .map(|s| format!("{}: {}", s, counts.get(*s)))
                .collect::<Vec<_>>()
                .join(" / ");
            println!("  {}", summary);
            let failed = results
                .iter()
                .filter(|r| r.sentiment == ERROR_LABEL)
                .count();
            if failed > 0 {
                println!("  ⚠ 分類失敗: {}件", failed);
            }

            println!("\n✅ 分類完了");
        }

        Commands::Serve { addr, input, store } => {
            let comments = comments::load_comments(input.as_deref())?;
            let store = ResultStore::new(store.unwrap_or_else(|| config.store_path.clone()));
            let addr = addr.unwrap_or_else(|| config.bind_addr.clone());

            println!("📊 feedback-ai - ダッシュボード");
            println!("  URL: http://{}", addr);
            println!("  結果ファイル: {}", store.path().display());
            println!("  コメント: {}件", comments.len());

            let state = dashboard::AppState::new(
                store,
                comments,
                analyzer::client_factory(config.clone(), provider),
                config.request_delay(),
            );
            dashboard::server::serve(&addr, state).await?;
        }

        Commands::Export { input, output } => {
            println!("📄 feedback-ai - エクスポート\n");

            let store = ResultStore::new(input.unwrap_or_else(|| config.store_path.clone()));
            let results = store
                .try_load()?
                .ok_or_else(|| error::FeedbackAiError::FileNotFound(store.path().display().to_string()))?;
            println!("- {}件の分類結果", results.len());

            export::export_results(&results, &output)?;

            println!("\n✅ エクスポート完了");
        }

        Commands::Config { set_api_key, set_model, set_delay_ms, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(key) = set_api_key {
                config.api_key = Some(key);
                changed = true;
                println!("✔ APIキーを設定しました");
            }

            if let Some(model) = set_model {
                println!("✔ モデルを設定しました: {}", model);
                config.model = Some(model);
                changed = true;
            }

            if let Some(delay) = set_delay_ms {
                config.request_delay_ms = delay;
                changed = true;
                println!("✔ 待機時間を設定しました: {}ms", delay);
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  プロバイダ: {}", provider);
                println!("  モデル: {}", config.model_for(provider));
                println!("  待機時間: {}ms", config.request_delay_ms);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  結果ファイル: {}", config.store_path.display());
                println!("  待ち受け: {}", config.bind_addr);
                println!(
                    "  APIキー: {}",
                    if config.get_api_key(provider).is_ok() { "設定済み" } else { "未設定" }
                );
            }
        }
    }

    Ok(())
}
