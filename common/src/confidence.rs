//! 総合信頼度の計算
//!
//! 各フィールドのスコアを固定の重みで加重和する（重みの合計は1.0）。

pub const BRAND_WEIGHT: f64 = 0.22;
pub const MODEL_WEIGHT: f64 = 0.26;
pub const PLATE_WEIGHT: f64 = 0.22;
pub const YEAR_WEIGHT: f64 = 0.20;
pub const TRIM_WEIGHT: f64 = 0.10;

/// 集計の入力
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfidenceInputs {
    pub brand_score: f64,
    pub model_score: f64,
    pub plate_confidence: f64,
    pub year_confidence: f64,
    pub trim_present: bool,
}

/// グレードのスコア（入力があれば0.8、なければ0.4）
///
/// グレード名そのものは照合しない。
pub fn trim_score(present: bool) -> f64 {
    if present {
        0.8
    } else {
        0.4
    }
}

/// 加重和を [0, 1] に丸めて返す
pub fn aggregate(inputs: &ConfidenceInputs) -> f64 {
    let total = inputs.brand_score * BRAND_WEIGHT
        + inputs.model_score * MODEL_WEIGHT
        + inputs.plate_confidence * PLATE_WEIGHT
        + inputs.year_confidence * YEAR_WEIGHT
        + trim_score(inputs.trim_present) * TRIM_WEIGHT;

    total.clamp(0.0, 1.0)
}
