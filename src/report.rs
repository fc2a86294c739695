//! 検証結果・評価結果の表示用テキスト

use smart_vehicle_common::{AcceptancePolicy, DatasetRow, FormEvaluation, Issue, Metrics};

fn mark(ok: bool) -> &'static str {
    if ok {
        "✔"
    } else {
        "✘"
    }
}

/// 0.0〜1.0を百分率（整数）に
pub fn percent(value: f64) -> String {
    format!("{}%", (value * 100.0).round() as i64)
}

/// フィールドごとの検証状況
pub fn format_evaluation(evaluation: &FormEvaluation, policy: &AcceptancePolicy) -> Vec<String> {
    vec![
        format!(
            "{} プレート: {} ({})",
            mark(evaluation.plate.ok),
            evaluation.plate.display,
            evaluation.plate.message
        ),
        format!(
            "{} ブランド: {} (類似度 {:.2})",
            mark(policy.brand_ok(evaluation)),
            evaluation.brand.matched,
            evaluation.brand.score
        ),
        format!(
            "{} モデル: {} (類似度 {:.2})",
            mark(policy.model_ok(evaluation)),
            evaluation.model.matched,
            evaluation.model.score
        ),
        format!(
            "{} 年式: {}",
            mark(evaluation.year.ok),
            evaluation.year.message
        ),
        format!("信頼度: {}", percent(evaluation.confidence)),
    ]
}

/// 修正候補
pub fn format_issue(issue: &Issue) -> String {
    format!("{} → {}", issue.field, issue.suggestion)
}

/// 評価結果
pub fn format_metrics(metrics: &Metrics) -> Vec<String> {
    vec![
        format!("件数: {}", metrics.total),
        format!("ブランド正解率: {}", percent(metrics.make_accuracy)),
        format!("モデル正解率: {}", percent(metrics.model_accuracy)),
        format!("年式正解率: {}", percent(metrics.year_accuracy)),
    ]
}

/// データセットのプレビュー行
pub fn format_row(row: &DatasetRow) -> String {
    format!(
        "{} | {} {} {} → {} {} {}",
        row.user_input_plate,
        row.user_input_brand,
        row.user_input_model,
        row.user_input_year,
        row.expected_brand,
        row.expected_model,
        row.expected_year
    )
}
