//! 編集距離ベースの類似度計算
//!
//! - レーベンシュタイン距離（大文字小文字を区別しない）
//! - 0〜1に正規化した類似度
//! - 候補リストからの最良一致選択

use serde::{Deserialize, Serialize};

/// 最良一致の結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    /// 一致した候補（入力が空なら空文字）
    #[serde(rename = "match")]
    pub matched: String,
    /// 類似度 [0, 1]
    pub score: f64,
}

impl SimilarityResult {
    /// 閾値を超えているか（閾値ちょうどは不合格）
    pub fn exceeds(&self, threshold: f64) -> bool {
        self.score > threshold
    }
}

/// レーベンシュタイン距離を計算
///
/// 両方の文字列を小文字化してから比較する。表全体を常に計算する。
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.to_lowercase().chars().collect();
    let b_chars: Vec<char> = b.to_lowercase().chars().collect();
    distance_chars(&a_chars, &b_chars)
}

fn distance_chars(a_chars: &[char], b_chars: &[char]) -> usize {
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b_len {
        matrix[0][j] = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a_len][b_len]
}

/// 類似度を計算（1 - 距離 / 最大長）
///
/// 空文字同士は1.0。長さは小文字化後の文字数で数える。
pub fn similarity(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.to_lowercase().chars().collect();
    let b_chars: Vec<char> = b.to_lowercase().chars().collect();

    let distance = distance_chars(&a_chars, &b_chars);
    let max_len = a_chars.len().max(b_chars.len()).max(1);

    1.0 - (distance as f64 / max_len as f64)
}

/// 候補の中から最も類似度の高いものを選ぶ
///
/// 入力が空なら比較せずに `{match: "", score: 0}` を返す。
/// 同点の場合はリストで先に出てくる候補が勝つ。下限はないので、
/// 採用するかどうかは呼び出し側が閾値で判断する。
pub fn best_match<S: AsRef<str>>(input: &str, candidates: &[S]) -> SimilarityResult {
    if input.is_empty() {
        return SimilarityResult::default();
    }

    let mut scores: Vec<(&str, f64)> = candidates
        .iter()
        .map(|c| (c.as_ref(), similarity(input, c.as_ref())))
        .collect();

    // 安定ソートなので同点は元の順序を保つ
    scores.sort_by(|x, y| y.1.total_cmp(&x.1));

    scores
        .first()
        .map(|(matched, score)| SimilarityResult {
            matched: matched.to_string(),
            score: *score,
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("abc", "abd"), 1);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_levenshtein_case_insensitive() {
        assert_eq!(levenshtein_distance("MYVI", "myvi"), 0);
        assert_eq!(levenshtein_distance("Toyota", "TOYYOTA"), 1);
    }

    #[test]
    fn test_levenshtein_symmetric() {
        let pairs = [("perdua", "Perodua"), ("vious", "Vios"), ("", "x"), ("HR-V", "hrv")];
        for (a, b) in pairs {
            assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
        }
    }

    #[test]
    fn test_similarity() {
        assert!((similarity("", "") - 1.0).abs() < 1e-9);
        assert!((similarity("Myvi", "myvi") - 1.0).abs() < 1e-9);
        // 1 - 1/7
        assert!((similarity("perdua", "Perodua") - (1.0 - 1.0 / 7.0)).abs() < 1e-9);
        assert!(similarity("abc", "").abs() < 1e-9);
    }

    #[test]
    fn test_similarity_symmetric_and_bounded() {
        let words = ["", "a", "Axia", "x70", "X-Trail", "Mercedes-Benz", "330l"];
        for a in words {
            for b in words {
                let s = similarity(a, b);
                assert!((0.0..=1.0).contains(&s));
                assert!((s - similarity(b, a)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_best_match_empty_input() {
        let result = best_match("", &["Perodua", "Proton"]);
        assert_eq!(result, SimilarityResult { matched: String::new(), score: 0.0 });

        let none: [&str; 0] = [];
        assert_eq!(best_match("", &none).score, 0.0);
    }

    #[test]
    fn test_best_match_picks_highest() {
        let result = best_match("perdua", &["Proton", "Perodua", "Toyota"]);
        assert_eq!(result.matched, "Perodua");
        assert!(result.score > 0.85);
    }

    #[test]
    fn test_best_match_tie_keeps_first_listed() {
        // どちらも距離1
        let result = best_match("X5", &["X50", "X51"]);
        assert_eq!(result.matched, "X50");

        let result = best_match("X5", &["X51", "X50"]);
        assert_eq!(result.matched, "X51");
    }

    #[test]
    fn test_best_match_no_candidates() {
        let none: [&str; 0] = [];
        assert_eq!(best_match("anything", &none), SimilarityResult::default());
    }

    #[test]
    fn test_exceeds_is_strict() {
        let result = SimilarityResult { matched: "Axia".into(), score: 0.8 };
        assert!(!result.exceeds(0.8));
        assert!(result.exceeds(0.79));
    }
}
