//! 入力フォームの評価と正規化ペイロードの生成
//!
//! ## 処理フロー
//! 1. ブランド: シノニム変換 → カタログのブランドと照合
//! 2. モデル: 照合したブランドを文脈にシノニム変換 → そのブランドのモデルと照合
//! 3. プレート・年式の形式チェック
//! 4. 総合信頼度の計算
//!
//! 評価は入力値だけから毎回計算し直す純粋関数。修正候補の採用は
//! `AcceptancePolicy` による別ステップで、評価そのものは変えない。

use crate::catalog;
use crate::confidence::{aggregate, ConfidenceInputs};
use crate::plate::{validate_plate, PlateResult};
use crate::similarity::{best_match, SimilarityResult};
use crate::synonyms::{canonical_make, canonical_model, DynamicSynonyms};
use crate::year::{suggest_year, validate_year, YearResult};
use serde::{Deserialize, Serialize};

/// フォームの入力値（すべて生の文字列）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleForm {
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub year: String,
    /// グレード
    pub trim: String,
}

impl VehicleForm {
    pub fn new(plate: &str, brand: &str, model: &str, year: &str, trim: &str) -> Self {
        Self {
            plate: plate.to_string(),
            brand: brand.to_string(),
            model: model.to_string(),
            year: year.to_string(),
            trim: trim.to_string(),
        }
    }
}

/// デモ用の入力例
pub const EXAMPLE_FORMS: [(&str, &str, &str, &str, &str); 4] = [
    ("wvy1234", "perdua", "myvee", "2019", "1.5 AV"),
    ("bml3301", "bmw", "330l", "2026", "M Sport"),
    ("qtr-88", "toyyota", "vious", "2014", "TRD"),
    ("jpb 7", "merc", "e300 amg", "2021", "AMG Line"),
];

/// 入力例をフォームとして取得
pub fn example_forms() -> Vec<VehicleForm> {
    EXAMPLE_FORMS
        .iter()
        .map(|(plate, brand, model, year, trim)| VehicleForm::new(plate, brand, model, year, trim))
        .collect()
}

/// ブランドをカタログと照合
pub fn match_brand(input: &str, synonyms: &DynamicSynonyms) -> SimilarityResult {
    let canonical = canonical_make(input, synonyms).unwrap_or_else(|| input.to_string());
    best_match(&canonical, &catalog::brands())
}

/// モデルをカタログと照合
///
/// ブランドにモデルがなければ全モデルが候補。
pub fn match_model(input: &str, synonyms: &DynamicSynonyms, brand: &str) -> SimilarityResult {
    let canonical = canonical_model(input, synonyms, brand).unwrap_or_else(|| input.to_string());
    best_match(&canonical, &catalog::model_candidates(brand))
}

/// フォームの評価結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormEvaluation {
    pub brand: SimilarityResult,
    pub model: SimilarityResult,
    pub plate: PlateResult,
    pub year: YearResult,
    pub confidence: f64,
    /// 年式の修正候補（範囲内に丸めた値）
    pub year_suggestion: i64,
}

/// フォームを評価
pub fn evaluate_form(
    form: &VehicleForm,
    synonyms: &DynamicSynonyms,
    current_year: i64,
) -> FormEvaluation {
    let brand = match_brand(&form.brand, synonyms);
    let model = match_model(&form.model, synonyms, &brand.matched);
    let plate = validate_plate(&form.plate);
    let year = validate_year(&form.year, current_year);

    let confidence = aggregate(&ConfidenceInputs {
        brand_score: brand.score,
        model_score: model.score,
        plate_confidence: plate.confidence,
        year_confidence: year.confidence,
        trim_present: !form.trim.is_empty(),
    });

    tracing::debug!(
        brand = %brand.matched,
        model = %model.matched,
        confidence,
        "form evaluated"
    );

    FormEvaluation {
        brand,
        model,
        plate,
        year,
        confidence,
        year_suggestion: suggest_year(&form.year, current_year),
    }
}

/// 問題のあるフィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IssueField {
    Plate,
    Brand,
    Model,
    Year,
}

impl std::fmt::Display for IssueField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueField::Plate => write!(f, "Plate format"),
            IssueField::Brand => write!(f, "Brand looks off"),
            IssueField::Model => write!(f, "Did you mean"),
            IssueField::Year => write!(f, "Year range"),
        }
    }
}

/// 修正候補
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub field: IssueField,
    pub suggestion: String,
}

/// 自動補正したフィールド
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corrections {
    pub plate: bool,
    pub brand: bool,
    pub model: bool,
    pub year: bool,
}

/// 照合結果を採用する閾値（ちょうど閾値の値は不採用）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcceptancePolicy {
    pub brand_threshold: f64,
    pub model_threshold: f64,
}

impl Default for AcceptancePolicy {
    fn default() -> Self {
        Self {
            brand_threshold: 0.85,
            model_threshold: 0.8,
        }
    }
}

impl AcceptancePolicy {
    pub fn brand_ok(&self, evaluation: &FormEvaluation) -> bool {
        evaluation.brand.exceeds(self.brand_threshold)
    }

    pub fn model_ok(&self, evaluation: &FormEvaluation) -> bool {
        evaluation.model.exceeds(self.model_threshold)
    }

    /// 修正候補の一覧（プレート、ブランド、モデル、年式の順）
    pub fn issues(&self, evaluation: &FormEvaluation) -> Vec<Issue> {
        let mut issues = Vec::new();

        if !evaluation.plate.ok {
            issues.push(Issue {
                field: IssueField::Plate,
                suggestion: evaluation.plate.display.clone(),
            });
        }
        if !self.brand_ok(evaluation) {
            issues.push(Issue {
                field: IssueField::Brand,
                suggestion: evaluation.brand.matched.clone(),
            });
        }
        if !self.model_ok(evaluation) {
            issues.push(Issue {
                field: IssueField::Model,
                suggestion: evaluation.model.matched.clone(),
            });
        }
        if !evaluation.year.ok {
            issues.push(Issue {
                field: IssueField::Year,
                suggestion: evaluation.year_suggestion.to_string(),
            });
        }

        issues
    }

    /// すべてのチェックを通過したか
    pub fn is_valid(&self, evaluation: &FormEvaluation) -> bool {
        evaluation.plate.ok
            && self.brand_ok(evaluation)
            && self.model_ok(evaluation)
            && evaluation.year.ok
    }

    /// 修正候補を1つ採用（フィールドを書き換え、補正フラグを立てる）
    pub fn accept(form: &mut VehicleForm, corrections: &mut Corrections, issue: &Issue) {
        match issue.field {
            IssueField::Plate => {
                form.plate = issue.suggestion.clone();
                corrections.plate = true;
            }
            IssueField::Brand => {
                form.brand = issue.suggestion.clone();
                corrections.brand = true;
            }
            IssueField::Model => {
                form.model = issue.suggestion.clone();
                corrections.model = true;
            }
            IssueField::Year => {
                form.year = issue.suggestion.clone();
                corrections.year = true;
            }
        }
    }
}

/// 連続する空白を1つにまとめ、前後を除去
pub fn normalize_text(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// ペイロードのプレート部分
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatePayload {
    pub raw: String,
    pub normalized: String,
    pub display: String,
}

/// ペイロードのフラグ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadFlags {
    pub plate_pattern_ok: bool,
    pub brand_auto_corrected: bool,
    pub model_auto_corrected: bool,
    pub year_auto_corrected: bool,
}

/// 後段に渡す正規化済みペイロード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPayload {
    pub plate: PlatePayload,
    pub brand: String,
    pub model: String,
    /// パースできなければnull
    pub year: Option<i64>,
    pub variant: String,
    pub confidence: f64,
    pub flags: PayloadFlags,
}

impl NormalizedPayload {
    pub fn build(
        form: &VehicleForm,
        evaluation: &FormEvaluation,
        corrections: &Corrections,
    ) -> Self {
        Self {
            plate: PlatePayload {
                raw: form.plate.clone(),
                normalized: evaluation.plate.normalized.clone(),
                display: evaluation.plate.display.clone(),
            },
            brand: evaluation.brand.matched.clone(),
            model: evaluation.model.matched.clone(),
            year: evaluation.year.year,
            variant: normalize_text(&form.trim),
            confidence: (evaluation.confidence * 1000.0).round() / 1000.0,
            flags: PayloadFlags {
                plate_pattern_ok: evaluation.plate.ok,
                brand_auto_corrected: corrections.brand,
                model_auto_corrected: corrections.model,
                year_auto_corrected: corrections.year,
            },
        }
    }
}
