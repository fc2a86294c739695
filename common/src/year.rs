//! 年式の検証
//!
//! 上限は評価時点の暦年。テストでは `current_year` を固定して渡す。

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// 受け付ける最古の年式
pub const MIN_YEAR: i64 = 1980;

/// 年式の検証結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearResult {
    pub ok: bool,
    pub confidence: f64,
    /// パースできた年（範囲外でも保持）
    pub year: Option<i64>,
    pub message: String,
}

/// 現在の暦年（ローカル時刻）
pub fn current_year() -> i64 {
    chrono::Local::now().year() as i64
}

/// 先頭の整数部分をパース
///
/// 先頭の空白を読み飛ばし、符号を1つ許し、最初の非数字で止まる。
/// 数字が1つもなければNone。`"2019abc"` は2019になる。
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let digits: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let value = digits
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add((b - b'0') as i64));

    Some(if negative { -value } else { value })
}

/// 年式を検証
pub fn validate_year(raw: &str, current_year: i64) -> YearResult {
    let parsed = if raw.is_empty() { None } else { parse_leading_int(raw) };

    let Some(year) = parsed else {
        return YearResult {
            ok: false,
            confidence: 0.2,
            year: None,
            message: "Enter a 4-digit year (e.g., 2019).".to_string(),
        };
    };

    let ok = (MIN_YEAR..=current_year).contains(&year);
    YearResult {
        ok,
        confidence: if ok { 0.98 } else { 0.4 },
        year: Some(year),
        message: if ok {
            "Looks valid.".to_string()
        } else {
            format!("Year should be between {} and {}.", MIN_YEAR, current_year)
        },
    }
}

/// 範囲外の年式に対する修正候補
///
/// 入力が空かパースできなければ現在の年、それ以外は範囲内に丸める。
pub fn suggest_year(raw: &str, current_year: i64) -> i64 {
    let parsed = if raw.is_empty() { None } else { parse_leading_int(raw) };
    let year = match parsed {
        Some(year) if year != 0 => year,
        _ => current_year,
    };
    MIN_YEAR.max(current_year.min(year))
}
