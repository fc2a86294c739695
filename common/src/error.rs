//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 必須列が欠けたデータセット（Foundは実際にあった列）
    #[error("CSV missing required columns. Found: {}", found.join(", "))]
    MissingColumns {
        found: Vec<String>,
        missing: Vec<String>,
    },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_display_missing_columns() {
        let error = Error::MissingColumns {
            found: vec!["user_input_plate".to_string(), "notes".to_string()],
            missing: vec!["expected_year".to_string()],
        };
        assert_eq!(
            format!("{}", error),
            "CSV missing required columns. Found: user_input_plate, notes"
        );
    }

    #[test]
    fn test_error_display_missing_columns_empty() {
        let error = Error::MissingColumns {
            found: vec![],
            missing: vec![],
        };
        assert_eq!(format!("{}", error), "CSV missing required columns. Found: ");
    }
}
