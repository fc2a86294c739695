use crate::error::{Result, VehicleError};
use serde::{Deserialize, Serialize};
use smart_vehicle_common::AcceptancePolicy;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ブランド照合の採用閾値
    pub brand_threshold: f64,
    /// モデル照合の採用閾値
    pub model_threshold: f64,
    /// `check` で --dataset 省略時に読み込むCSV
    pub default_dataset: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let policy = AcceptancePolicy::default();
        Self {
            brand_threshold: policy.brand_threshold,
            model_threshold: policy.model_threshold,
            default_dataset: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| VehicleError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("smart-vehicle").join("config.json"))
    }

    /// 閾値は0.0〜1.0
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("brand_threshold", self.brand_threshold),
            ("model_threshold", self.model_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(VehicleError::Config(format!(
                    "{} は0.0〜1.0で指定してください: {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    pub fn policy(&self) -> AcceptancePolicy {
        AcceptancePolicy {
            brand_threshold: self.brand_threshold,
            model_threshold: self.model_threshold,
        }
    }
}
