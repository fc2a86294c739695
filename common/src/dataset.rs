//! 学習用データセットモジュール
//!
//! 利用者の入力と正解ラベルを並べたCSVを読み込み、
//! シノニム学習と照合精度の評価に使う。

use crate::error::{Error, Result};
use crate::form::{match_brand, match_model};
use crate::synonyms::DynamicSynonyms;
use crate::year::validate_year;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 必須列（名前で照合し、順序は問わない）
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "user_input_plate",
    "user_input_brand",
    "user_input_model",
    "user_input_year",
    "expected_brand",
    "expected_model",
    "expected_year",
];

/// CSVの1行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub user_input_plate: String,
    pub user_input_brand: String,
    pub user_input_model: String,
    /// 年式は文字列のまま保持し、評価時にパースする
    pub user_input_year: String,
    pub expected_brand: String,
    pub expected_model: String,
    pub expected_year: String,
}

impl DatasetRow {
    fn from_record(record: &HashMap<String, String>) -> Self {
        let get = |column: &str| record.get(column).cloned().unwrap_or_default();
        Self {
            user_input_plate: get("user_input_plate"),
            user_input_brand: get("user_input_brand"),
            user_input_model: get("user_input_model"),
            user_input_year: get("user_input_year"),
            expected_brand: get("expected_brand"),
            expected_model: get("expected_model"),
            expected_year: get("expected_year"),
        }
    }
}

/// 照合精度
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total: usize,
    pub make_accuracy: f64,
    pub model_accuracy: f64,
    pub year_accuracy: f64,
}

/// パース済みCSV（ヘッダーと、列名→値のレコード）
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    /// ヘッダー（重複は最初の位置に1つだけ）
    pub headers: Vec<String>,
    pub records: Vec<HashMap<String, String>>,
}

/// CSV文字列をパース
///
/// 改行で行を区切り、空行は捨てる。1行目はヘッダー。
/// 足りないセルは空文字、同じ列名が重複したら後の列が勝つ。
pub fn parse_csv(text: &str) -> CsvTable {
    let text = text.replace('\r', "");
    let mut lines = text.split('\n').filter(|l| !l.is_empty());

    let Some(header_line) = lines.next() else {
        return CsvTable::default();
    };
    let header_cells = split_csv_line(header_line);

    let mut headers: Vec<String> = Vec::new();
    for h in &header_cells {
        if !headers.contains(h) {
            headers.push(h.clone());
        }
    }

    let records = lines
        .map(|line| {
            let cells = split_csv_line(line);
            header_cells
                .iter()
                .enumerate()
                .map(|(i, h)| (h.clone(), cells.get(i).cloned().unwrap_or_default()))
                .collect()
        })
        .collect();

    CsvTable { headers, records }
}

/// CSV行をパース（ダブルクォート対応、`""` はエスケープされた引用符）
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields.into_iter().map(|f| f.trim().to_string()).collect()
}

/// CSV文字列からデータセットを読み込む
///
/// 必須列が1つでも欠けていればデータセット全体を拒否する。
/// データ行がないファイルは列が見つからなかったものとして扱う。
pub fn load_rows_from_str(content: &str) -> Result<Vec<DatasetRow>> {
    let table = parse_csv(content);

    let found: Vec<String> = if table.records.is_empty() {
        Vec::new()
    } else {
        table.headers.clone()
    };

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !found.iter().any(|f| f == *c))
        .map(|c| c.to_string())
        .collect();

    if !missing.is_empty() {
        tracing::warn!(?found, ?missing, "dataset rejected");
        return Err(Error::MissingColumns { found, missing });
    }

    Ok(table.records.iter().map(DatasetRow::from_record).collect())
}

/// 現在のシノニムとカタログでデータセット全行を照合し、精度を計算
///
/// 行がなければNone。
pub fn evaluate_rows(
    rows: &[DatasetRow],
    synonyms: &DynamicSynonyms,
    current_year: i64,
) -> Option<Metrics> {
    if rows.is_empty() {
        return None;
    }

    let mut correct_make = 0;
    let mut correct_model = 0;
    let mut correct_year = 0;

    for row in rows {
        let brand = match_brand(&row.user_input_brand, synonyms);
        let model = match_model(&row.user_input_model, synonyms, &brand.matched);
        let year = validate_year(&row.user_input_year, current_year);

        if brand.matched == row.expected_brand {
            correct_make += 1;
        }
        if model.matched == row.expected_model {
            correct_model += 1;
        }

        let year_text = year
            .year
            .filter(|y| *y != 0)
            .map(|y| y.to_string())
            .unwrap_or_default();
        if year_text == row.expected_year {
            correct_year += 1;
        }
    }

    let total = rows.len();
    let metrics = Metrics {
        total,
        make_accuracy: correct_make as f64 / total as f64,
        model_accuracy: correct_model as f64 / total as f64,
        year_accuracy: correct_year as f64 / total as f64,
    };
    tracing::info!(?metrics, "dataset evaluated");

    Some(metrics)
}
