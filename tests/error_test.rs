//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use smart_vehicle_rust::error::VehicleError;
use smart_vehicle_rust::selector;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないパスを指定した場合
#[test]
fn test_resolve_nonexistent_path() {
    let result = selector::resolve_dataset(Path::new("/nonexistent/path/12345"));
    assert!(matches!(result, Err(VehicleError::FileNotFound(_))));
}

/// 存在しないフォルダを一覧した場合
#[test]
fn test_list_nonexistent_folder() {
    let result = selector::list_datasets(Path::new("/nonexistent/path/12345"));
    assert!(matches!(result, Err(VehicleError::FolderNotFound(_))));
}

/// CSVのないフォルダ
#[test]
fn test_resolve_folder_without_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();

    let result = selector::resolve_dataset(dir.path());
    assert!(matches!(result, Err(VehicleError::NoDatasetsFound(_))));
}

/// VehicleErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        VehicleError::Config("テスト設定エラー".to_string()),
        VehicleError::FileNotFound("rows.csv".to_string()),
        VehicleError::FolderNotFound("/path/to/folder".to_string()),
        VehicleError::NoDatasetsFound("/path/to/folder".to_string()),
        VehicleError::Prompt("入力が中断されました".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: VehicleError = io_err.into();

    assert!(matches!(err, VehicleError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: VehicleError = json_err.into();

    assert!(matches!(err, VehicleError::JsonParse(_)));
}

/// common::Errorからの変換（列不足のメッセージが残る）
#[test]
fn test_common_error_conversion() {
    let common_err = smart_vehicle_common::Error::MissingColumns {
        found: vec!["user_input_plate".to_string()],
        missing: vec!["expected_year".to_string()],
    };
    let err: VehicleError = common_err.into();

    assert!(matches!(err, VehicleError::Dataset(_)));
    let display = format!("{}", err);
    assert!(display.contains("CSV missing required columns. Found: user_input_plate"));
}
