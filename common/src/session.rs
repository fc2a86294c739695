//! 検証セッション
//!
//! 読み込んだデータセット、学習したシノニム、評価結果を1か所で保持する。
//! 状態は load → 学習 → 評価 の順に逐次更新するだけで、並行更新はない。

use crate::dataset::{evaluate_rows, load_rows_from_str, DatasetRow, Metrics};
use crate::error::Result;
use crate::form::{evaluate_form, FormEvaluation, VehicleForm};
use crate::synonyms::DynamicSynonyms;
use crate::year::current_year;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ValidationSession {
    rows: Vec<DatasetRow>,
    synonyms: DynamicSynonyms,
    metrics: Option<Metrics>,
    current_year: i64,
}

impl Default for ValidationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationSession {
    /// 現在の暦年を上限にしたセッション
    pub fn new() -> Self {
        Self::with_current_year(current_year())
    }

    /// 年式の上限を固定したセッション
    pub fn with_current_year(current_year: i64) -> Self {
        Self {
            rows: Vec::new(),
            synonyms: DynamicSynonyms::default(),
            metrics: None,
            current_year,
        }
    }

    pub fn current_year(&self) -> i64 {
        self.current_year
    }

    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    pub fn synonyms(&self) -> &DynamicSynonyms {
        &self.synonyms
    }

    pub fn metrics(&self) -> Option<&Metrics> {
        self.metrics.as_ref()
    }

    /// 先頭n行のプレビュー
    pub fn preview(&self, n: usize) -> &[DatasetRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// CSV文字列からデータセットを読み込む
    ///
    /// 成功すると行とシノニムを丸ごと置き換え、評価結果を破棄する。
    /// 必須列が欠けていれば状態をすべて空に戻してエラーを返す。
    pub fn load_dataset_str(&mut self, content: &str) -> Result<usize> {
        match load_rows_from_str(content) {
            Ok(rows) => {
                self.apply_rows(rows);
                Ok(self.rows.len())
            }
            Err(e) => {
                self.clear();
                Err(e)
            }
        }
    }

    /// CSVファイルからデータセットを読み込む
    ///
    /// ファイルが読めない場合は既存の状態に触れない。
    pub fn load_dataset(&mut self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path)?;
        let count = self.load_dataset_str(&content)?;
        tracing::info!(path = %path.display(), rows = count, "dataset loaded");
        Ok(count)
    }

    /// パース済みの行を適用する
    pub fn apply_rows(&mut self, rows: Vec<DatasetRow>) {
        self.synonyms = DynamicSynonyms::learn(&rows);
        self.rows = rows;
        self.metrics = None;
    }

    /// データセット・シノニム・評価結果をすべて破棄
    pub fn clear(&mut self) {
        self.rows.clear();
        self.synonyms = DynamicSynonyms::default();
        self.metrics = None;
    }

    /// 現在のシノニムでデータセット全体を評価し、結果を保持する
    pub fn evaluate(&mut self) -> Option<Metrics> {
        self.metrics = evaluate_rows(&self.rows, &self.synonyms, self.current_year);
        self.metrics
    }

    /// フォームを現在のシノニムで評価
    pub fn evaluate_form(&self, form: &VehicleForm) -> FormEvaluation {
        evaluate_form(form, &self.synonyms, self.current_year)
    }
}
