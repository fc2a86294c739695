//! Smart Vehicle Common Library
//!
//! 車両登録データ（プレート・ブランド・モデル・年式・グレード）の
//! 検証と自動補正のコア。UIやI/Oには依存しない。

pub mod catalog;
pub mod confidence;
pub mod dataset;
pub mod error;
pub mod form;
pub mod plate;
pub mod session;
pub mod similarity;
pub mod synonyms;
pub mod year;

pub use dataset::{DatasetRow, Metrics, REQUIRED_COLUMNS};
pub use error::{Error, Result};
pub use form::{
    evaluate_form, AcceptancePolicy, Corrections, FormEvaluation, Issue, IssueField,
    NormalizedPayload, VehicleForm,
};
pub use plate::{sanitize_plate, validate_plate, PlateResult, SanitizedPlate};
pub use session::ValidationSession;
pub use similarity::{best_match, levenshtein_distance, similarity, SimilarityResult};
pub use synonyms::{canonical_make, canonical_model, DynamicSynonyms};
pub use year::{validate_year, YearResult};
