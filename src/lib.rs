pub mod ai_provider;
pub mod analyzer;
pub mod cli;
pub mod comments;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod store;
