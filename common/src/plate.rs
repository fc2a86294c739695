//! ナンバープレートの整形と検証
//!
//! 英大文字と数字以外を取り除き、「英字1〜4文字＋数字1〜4桁」の形式か判定する。

use regex::Regex;
use serde::{Deserialize, Serialize};

/// 検証成功時の上限
pub const PLATE_CONFIDENCE_CAP: f64 = 0.98;

const VALID_MESSAGE: &str = "Looks valid.";
const HINT_MESSAGE: &str = "Plate should be 1-4 letters followed by 1-4 digits (e.g., WVY 1234).";

lazy_static::lazy_static! {
    static ref NON_PLATE_RE: Regex = Regex::new(r"[^A-Z0-9]").unwrap();
    static ref BOUNDARY_RE: Regex = Regex::new(r"([A-Z]+)([0-9]+)").unwrap();
    static ref FULL_RE: Regex = Regex::new(r"^[A-Z]{1,4}[0-9]{1,4}$").unwrap();
    static ref PREFIX_RE: Regex = Regex::new(r"^[A-Z]{1,4}").unwrap();
    static ref SUFFIX_RE: Regex = Regex::new(r"[0-9]{1,4}$").unwrap();
}

/// 整形済みプレート
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizedPlate {
    /// 英大文字と数字のみ
    pub clean: String,
    /// 最初の英字列と数字列の間に空白を1つ挿入したもの
    pub readable: String,
}

/// プレート検証結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateResult {
    pub ok: bool,
    pub confidence: f64,
    pub normalized: String,
    pub display: String,
    pub message: String,
}

/// プレート文字列を整形
///
/// 空白の挿入は最初の「英字列→数字列」の境界1か所だけ。
/// 数字が先に来るなど変則的な並びは部分的にしか整形されない。
pub fn sanitize_plate(raw: &str) -> SanitizedPlate {
    let upper = raw.to_uppercase();
    let clean = NON_PLATE_RE.replace_all(&upper, "").into_owned();
    let readable = BOUNDARY_RE.replace(&clean, "$1 $2").into_owned();

    SanitizedPlate { clean, readable }
}

/// プレートを検証
///
/// 信頼度は0.2から始まり、先頭が英字1〜4文字なら+0.2、末尾が数字1〜4桁なら+0.2。
/// 形式に完全一致すれば0.95に固定する。
pub fn validate_plate(raw: &str) -> PlateResult {
    let SanitizedPlate { clean, readable } = sanitize_plate(raw);
    let ok = FULL_RE.is_match(&clean);

    let mut confidence: f64 = 0.2;
    if PREFIX_RE.is_match(&clean) {
        confidence += 0.2;
    }
    if SUFFIX_RE.is_match(&clean) {
        confidence += 0.2;
    }
    if ok {
        confidence = 0.95;
    }

    PlateResult {
        ok,
        confidence: confidence.clamp(0.0, PLATE_CONFIDENCE_CAP),
        normalized: clean,
        display: readable,
        message: if ok { VALID_MESSAGE } else { HINT_MESSAGE }.to_string(),
    }
}
