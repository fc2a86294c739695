//! 設定ファイルの読み書きテスト

use smart_vehicle_rust::config::Config;
use smart_vehicle_rust::error::VehicleError;
use tempfile::tempdir;

/// ファイルがなければ既定値
#[test]
fn test_load_missing_file_returns_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();

    assert!((config.brand_threshold - 0.85).abs() < 1e-9);
    assert!((config.model_threshold - 0.8).abs() < 1e-9);
    assert!(config.default_dataset.is_none());
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        brand_threshold: 0.9,
        model_threshold: 0.7,
        default_dataset: Some(dir.path().join("rows.csv")),
    };
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert!((loaded.brand_threshold - 0.9).abs() < 1e-9);
    assert_eq!(loaded.default_dataset, config.default_dataset);

    let policy = loaded.policy();
    assert!((policy.model_threshold - 0.7).abs() < 1e-9);
}

/// 一部の項目だけのファイルは残りを既定値で補う
#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "model_threshold": 0.5 }"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!((config.brand_threshold - 0.85).abs() < 1e-9);
    assert!((config.model_threshold - 0.5).abs() < 1e-9);
}

/// 範囲外の閾値はエラー
#[test]
fn test_out_of_range_threshold_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "brand_threshold": 1.5 }"#).unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(VehicleError::Config(_))));
}

/// 壊れたJSON
#[test]
fn test_invalid_json_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(VehicleError::JsonParse(_))));
}
