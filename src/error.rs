use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedbackAiError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`feedback-ai config --set-api-key YOUR_KEY` または環境変数 {0} で設定してください")]
    MissingApiKey(&'static str),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("結果ファイルの書き込みに失敗: {path}: {source}")]
    StoreWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("サーバーエラー: {0}")]
    Server(String),

    #[error("ブロッキング処理が中断されました: {0}")]
    Task(String),

    #[error(transparent)]
    Common(#[from] feedback_ai_common::Error),
}

pub type Result<T> = std::result::Result<T, FeedbackAiError>;
