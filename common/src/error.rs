//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Excel error: {0}")]
    Excel(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_parse() {
        let error = Error::Parse("JSONが見つかりません".to_string());
        assert_eq!(format!("{}", error), "Parse error: JSONが見つかりません");
    }

    #[test]
    fn test_error_display_excel() {
        let error = Error::Excel("Excel保存エラー: disk full".to_string());
        assert_eq!(format!("{}", error), "Excel error: Excel保存エラー: disk full");
    }

    #[test]
    fn test_extract_json_failure_is_parse_error() {
        let err = crate::parser::extract_json("no braces here").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
