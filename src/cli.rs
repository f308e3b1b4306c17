use clap::{Parser, Subcommand};
use crate::ai_provider::AiProvider;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "feedback-ai")]
#[command(about = "授業アンケート自由記述のAI分類・ダッシュボード", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// AIプロバイダ (mistral/gemini)
    #[arg(long, default_value = "mistral", global = true)]
    pub ai_provider: AiProvider,
}

#[derive(Subcommand)]
pub enum Commands {
    /// コメントを分類してJSONに保存
    Analyze {
        /// コメントファイル（.jsonは文字列配列、それ以外は1行1件。省略時はサンプル）
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// 出力JSONファイル（デフォルト: 設定のstore_path）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// API呼び出し間の待機ミリ秒（デフォルト: 設定値）
        #[arg(long)]
        delay_ms: Option<u64>,

        /// プログレスバーを表示しない
        #[arg(long)]
        no_progress: bool,
    },

    /// ダッシュボードを起動
    Serve {
        /// 待ち受けアドレス（デフォルト: 設定のbind_addr）
        #[arg(short, long)]
        addr: Option<String>,

        /// コメントファイル（省略時はサンプル）
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// 結果JSONファイル（デフォルト: 設定のstore_path）
        #[arg(short, long)]
        store: Option<PathBuf>,
    },

    /// 分類結果をExcelに出力
    Export {
        /// 入力JSONファイル（デフォルト: 設定のstore_path）
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long, default_value = "feedback.xlsx")]
        output: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// モデルを設定
        #[arg(long)]
        set_model: Option<String>,

        /// API呼び出し間の待機ミリ秒を設定
        #[arg(long)]
        set_delay_ms: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
