//! 車両カタログ（ブランド→モデル一覧の固定参照データ）

/// ブランドとモデル一覧（表示順を保持）
pub const VEHICLE_CATALOG: &[(&str, &[&str])] = &[
    ("Perodua", &["Axia", "Bezza", "Myvi", "Aruz", "Alza", "Ativa"]),
    (
        "Proton",
        &["Saga", "Persona", "Iriz", "X50", "X70", "X90", "Exora", "Wira", "Waja", "Perdana"],
    ),
    ("Toyota", &["Vios", "Yaris", "Corolla Altis", "Camry", "Hilux", "Avanza"]),
    ("Honda", &["City", "Civic", "HR-V", "CR-V", "Accord", "Jazz"]),
    ("Nissan", &["Almera", "X-Trail", "Serena"]),
    ("Mazda", &["Mazda 2", "Mazda 3", "CX-3", "CX-5", "CX-8"]),
    ("Mercedes-Benz", &["A 200", "C 200", "E 300", "E 63", "GLC 300"]),
    ("BMW", &["320i", "330i", "520i", "X1", "X3"]),
    ("Hyundai", &["Elantra", "Tucson", "Santa Fe", "Kona"]),
    ("Kia", &["Cerato", "Picanto", "Sportage", "Sorento"]),
    ("Volkswagen", &["Polo", "Jetta", "Golf", "Passat"]),
];

/// ブランド一覧
pub fn brands() -> Vec<&'static str> {
    VEHICLE_CATALOG.iter().map(|(brand, _)| *brand).collect()
}

/// ブランドに対応するモデル一覧（未知のブランドは空）
pub fn models_for(brand: &str) -> &'static [&'static str] {
    VEHICLE_CATALOG
        .iter()
        .find(|(b, _)| *b == brand)
        .map(|(_, models)| *models)
        .unwrap_or(&[])
}

/// 全モデル（カタログ順に平坦化）
pub fn all_models() -> Vec<&'static str> {
    VEHICLE_CATALOG
        .iter()
        .flat_map(|(_, models)| models.iter().copied())
        .collect()
}

/// モデル照合の候補
///
/// ブランドにモデルがなければ全モデルを候補にする。
pub fn model_candidates(brand: &str) -> Vec<&'static str> {
    let models = models_for(brand);
    if models.is_empty() {
        all_models()
    } else {
        models.to_vec()
    }
}

/// カタログに載っている正式名か
pub fn is_canonical_brand(name: &str) -> bool {
    VEHICLE_CATALOG.iter().any(|(b, _)| *b == name)
}
