use thiserror::Error;

#[derive(Error, Debug)]
pub enum VehicleError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("CSVファイルが見つかりません: {0}")]
    NoDatasetsFound(String),

    #[error("データセットエラー: {0}")]
    Dataset(#[from] smart_vehicle_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, VehicleError>;
