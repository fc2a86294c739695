//! データセットの選択
//!
//! フォルダが指定された場合は直下のCSVを一覧にして対話式で選ぶ。

use crate::error::{Result, VehicleError};
use dialoguer::Select;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// フォルダ直下のCSVファイル一覧（ファイル名順）
pub fn list_datasets(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(VehicleError::FolderNotFound(folder.display().to_string()));
    }

    let mut datasets: Vec<PathBuf> = WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && is_csv(p))
        .collect();

    datasets.sort();
    Ok(datasets)
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// データ行数（ヘッダー除く、空行は数えない）
pub fn count_csv_rows(path: &Path) -> usize {
    std::fs::read_to_string(path)
        .map(|content| {
            content
                .lines()
                .filter(|l| !l.trim_end_matches('\r').is_empty())
                .count()
                .saturating_sub(1)
        })
        .unwrap_or(0)
}

/// 読み込むデータセットを決める
///
/// ファイルならそのまま、フォルダならCSVが1つだけのときはそれを、
/// 複数あるときは対話式で選ぶ。
pub fn resolve_dataset(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    if !path.exists() {
        return Err(VehicleError::FileNotFound(path.display().to_string()));
    }

    let datasets = list_datasets(path)?;
    match datasets.len() {
        0 => Err(VehicleError::NoDatasetsFound(path.display().to_string())),
        1 => Ok(datasets[0].clone()),
        _ => select_interactive(&datasets),
    }
}

fn select_interactive(datasets: &[PathBuf]) -> Result<PathBuf> {
    let items: Vec<String> = datasets
        .iter()
        .map(|p| {
            let name = p
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            format!("{} ({}件)", name, count_csv_rows(p))
        })
        .collect();

    println!("\n📋 データセットを選択してください:\n");
    let index = Select::new()
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| VehicleError::Prompt(e.to_string()))?;

    Ok(datasets[index].clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_csv() {
        assert!(is_csv(Path::new("rows.csv")));
        assert!(is_csv(Path::new("ROWS.CSV")));
        assert!(!is_csv(Path::new("rows.json")));
        assert!(!is_csv(Path::new("rows")));
    }
}
