//! Feedback AI Common Library
//!
//! CLIとダッシュボードで共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod prompts;
pub mod parser;
pub mod analyzer;
pub mod export;

pub use types::{Classification, ClassificationResult, Sentiment, SentimentCounts};
pub use error::{Error, Result};
pub use prompts::{build_classify_prompt, CATEGORIES};
pub use parser::{extract_json, parse_classify_response, ClassifyPayload, ModelReply};
pub use analyzer::{
    canonical_category, canonical_sentiment, count_sentiments, normalize_reply, DEFAULT_CATEGORY,
    DEFAULT_SENTIMENT, ERROR_LABEL,
};

#[cfg(feature = "excel")]
pub use export::excel_core::generate_excel_buffer;
