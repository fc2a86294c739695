//! 表記ゆれ（シノニム）変換モジュール
//!
//! ブランド名・モデル名のスペルゆれを正式名に変換する。
//! 固定テーブルと、データセットから学習した動的テーブルの2段構え。
//! 動的テーブルを先に引き、なければ固定テーブルにフォールバックする。

use crate::dataset::DatasetRow;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// ブランドの固定シノニム（キーは正規化済み）
const MAKE_SYNONYMS: &[(&str, &str)] = &[
    ("perodua", "Perodua"),
    ("peroduo", "Perodua"),
    ("proton", "Proton"),
    ("toyyota", "Toyota"),
    ("toyota", "Toyota"),
    ("honda", "Honda"),
    ("nissan", "Nissan"),
    ("mazda", "Mazda"),
    ("merc", "Mercedes-Benz"),
    ("mercedes", "Mercedes-Benz"),
    ("mercedesbenz", "Mercedes-Benz"),
    ("bmw", "BMW"),
    ("hyundai", "Hyundai"),
    ("kia", "Kia"),
    ("vw", "Volkswagen"),
    ("volkswagen", "Volkswagen"),
];

/// モデルの固定シノニム（キーは小文字化・前後空白除去のみ）
const MODEL_SYNONYMS: &[(&str, &str)] = &[
    ("myvee", "Myvi"),
    ("myvy", "Myvi"),
    ("beza", "Bezza"),
    ("alzza", "Alza"),
    ("segar", "Saga"),
    ("personna", "Persona"),
    ("x7o", "X70"),
    ("vious", "Vios"),
    ("altis", "Corolla Altis"),
    ("e300 amg", "E 300"),
    ("e300", "E 300"),
    ("e63", "E 63"),
    ("civc", "Civic"),
    ("hrv", "HR-V"),
    ("crv", "CR-V"),
];

/// 照合キーに変換（小文字化、空白とハイフンを除去）
pub fn lookup_key(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// データセットから学習した動的シノニム
///
/// 新しいデータセットを読み込むたびに丸ごと作り直す（マージしない）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicSynonyms {
    /// 照合キー → 正式ブランド名
    #[serde(default)]
    pub make: HashMap<String, String>,
    /// 正式ブランド名 → (照合キー → 正式モデル名)
    #[serde(default)]
    pub model: HashMap<String, HashMap<String, String>>,
}

impl DynamicSynonyms {
    /// データセットの全行からテーブルを構築（同じキーは後の行が勝つ）
    pub fn learn(rows: &[DatasetRow]) -> Self {
        let mut table = Self::default();

        for row in rows {
            let user_brand = lookup_key(&row.user_input_brand);
            let expected_brand = row.expected_brand.trim();
            if !user_brand.is_empty() && !expected_brand.is_empty() {
                table.make.insert(user_brand, expected_brand.to_string());
            }

            let user_model = lookup_key(&row.user_input_model);
            let expected_model = row.expected_model.trim();
            if !expected_brand.is_empty() && !user_model.is_empty() && !expected_model.is_empty() {
                table
                    .model
                    .entry(expected_brand.to_string())
                    .or_default()
                    .insert(user_model, expected_model.to_string());
            }
        }

        tracing::debug!(
            makes = table.make.len(),
            brands_with_models = table.model.len(),
            "learned synonym tables"
        );

        table
    }

    /// テーブルが空か
    pub fn is_empty(&self) -> bool {
        self.make.is_empty() && self.model.is_empty()
    }

    /// 学習したモデルシノニムの総数
    pub fn model_entries(&self) -> usize {
        self.model.values().map(HashMap::len).sum()
    }
}

/// ブランド名を正式名に変換（見つからなければNone）
pub fn canonical_make(input: &str, dynamic: &DynamicSynonyms) -> Option<String> {
    let key = lookup_key(input);

    if let Some(found) = dynamic.make.get(&key) {
        return Some(found.clone());
    }

    MAKE_SYNONYMS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
}

/// モデル名を正式名に変換（見つからなければNone）
///
/// 動的テーブルはブランド別に照合キーで引く。固定テーブルは
/// 小文字化と前後空白除去だけで引く（"HR-V"のハイフンなどは意味を持つ）。
pub fn canonical_model(input: &str, dynamic: &DynamicSynonyms, brand: &str) -> Option<String> {
    if let Some(found) = dynamic
        .model
        .get(brand)
        .and_then(|models| models.get(&lookup_key(input)))
    {
        return Some(found.clone());
    }

    let lowered = input.to_lowercase();
    let lowered = lowered.trim();
    MODEL_SYNONYMS
        .iter()
        .find(|(k, _)| *k == lowered)
        .map(|(_, v)| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn row(user_brand: &str, user_model: &str, brand: &str, model: &str) -> DatasetRow {
        DatasetRow {
            user_input_brand: user_brand.to_string(),
            user_input_model: user_model.to_string(),
            expected_brand: brand.to_string(),
            expected_model: model.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_lookup_key() {
        assert_eq!(lookup_key("Mercedes - Benz"), "mercedesbenz");
        assert_eq!(lookup_key("  V W "), "vw");
        assert_eq!(lookup_key("HR-V"), "hrv");
    }

    #[test]
    fn test_static_make() {
        let empty = DynamicSynonyms::default();
        assert_eq!(canonical_make("Mercedes-Benz", &empty), Some("Mercedes-Benz".into()));
        assert_eq!(canonical_make("MERC", &empty), Some("Mercedes-Benz".into()));
        assert_eq!(canonical_make("v w", &empty), Some("Volkswagen".into()));
        assert_eq!(canonical_make("perdua", &empty), None);
    }

    #[test]
    fn test_static_model_keeps_inner_spacing() {
        let empty = DynamicSynonyms::default();
        assert_eq!(canonical_model(" E300 AMG ", &empty, ""), Some("E 300".into()));
        assert_eq!(canonical_model("hrv", &empty, "Honda"), Some("HR-V".into()));
        // 固定テーブルは内部の空白を除去しない
        assert_eq!(canonical_model("e300amg", &empty, ""), None);
        assert_eq!(canonical_model("hr v", &empty, "Honda"), None);
    }

    #[test]
    fn test_static_tables_point_into_catalog() {
        for (_, brand) in MAKE_SYNONYMS {
            assert!(catalog::is_canonical_brand(brand), "{}", brand);
        }
        let models = catalog::all_models();
        for (_, model) in MODEL_SYNONYMS {
            assert!(models.contains(model), "{}", model);
        }
    }

    #[test]
    fn test_learn_and_lookup() {
        let table = DynamicSynonyms::learn(&[row("toyyota", "vioss", "Toyota", "Vios")]);
        assert_eq!(canonical_make("TOYYOTA", &table), Some("Toyota".into()));
        assert_eq!(canonical_make("toy yota", &table), Some("Toyota".into()));
        assert_eq!(canonical_model("VIOSS", &table, "Toyota"), Some("Vios".into()));
        // ブランド文脈が違えば動的テーブルは引かれない
        assert_eq!(canonical_model("vioss", &table, "Honda"), None);
    }

    #[test]
    fn test_dynamic_takes_precedence() {
        let table = DynamicSynonyms::learn(&[row("merc", "", "Mercedes", "")]);
        assert_eq!(canonical_make("merc", &table), Some("Mercedes".into()));
    }

    #[test]
    fn test_learn_last_write_wins() {
        let table = DynamicSynonyms::learn(&[
            row("hnda", "cvic", "Honda", "Civic"),
            row("hnda", "cvic", "Hyundai", "City"),
        ]);
        assert_eq!(table.make.get("hnda"), Some(&"Hyundai".to_string()));
        assert_eq!(table.model["Honda"].get("cvic"), Some(&"Civic".to_string()));
        assert_eq!(table.model["Hyundai"].get("cvic"), Some(&"City".to_string()));
    }

    #[test]
    fn test_learn_skips_blank_values() {
        let table = DynamicSynonyms::learn(&[
            row("", "myvee", "Perodua", "Myvi"),
            row("prtn", "", "Proton", "Saga"),
            row("kiaa", "pcanto", "  ", "Picanto"),
        ]);
        assert!(!table.make.contains_key(""));
        assert_eq!(table.make.get("prtn"), Some(&"Proton".to_string()));
        assert!(!table.make.contains_key("kiaa"));
        assert_eq!(table.model_entries(), 1);
        assert_eq!(table.model["Perodua"].get("myvee"), Some(&"Myvi".to_string()));
    }

    #[test]
    fn test_learn_trims_expected_values() {
        let table = DynamicSynonyms::learn(&[row("toyyota", "vious", " Toyota ", " Vios ")]);
        assert_eq!(table.make.get("toyyota"), Some(&"Toyota".to_string()));
        assert_eq!(table.model["Toyota"].get("vious"), Some(&"Vios".to_string()));
    }
}
