use crate::domain::model::PromotionKey;
use crate::utils::error::{PromotionError, Result};
use crate::utils::validation::{
    validate_country_code, validate_non_empty_string, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"));

/// Catalog overrides loaded from a TOML file.
///
/// ```toml
/// [catalog]
/// name = "staging"
///
/// [promotions.tap-network]
/// regions = ["US", "CA"]
/// url = "${TAP_NETWORK_URL}"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub catalog: Option<CatalogMetadata>,
    #[serde(default)]
    pub promotions: BTreeMap<String, PromotionOverride>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMetadata {
    pub name: String,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromotionOverride {
    pub regions: Option<Vec<String>>,
    pub all_regions: Option<bool>,
    pub url: Option<String>,
}

impl CatalogConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PromotionError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PromotionError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${TAP_NETWORK_URL})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn name(&self) -> &str {
        self.catalog
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("default")
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(metadata) = &self.catalog {
            validate_non_empty_string("catalog.name", &metadata.name)?;
        }

        for (name, promotion) in &self.promotions {
            let key: PromotionKey = name.parse()?;
            let field = format!("promotions.{}", name);

            if key.is_valid_everywhere() && promotion.regions.is_some() {
                return Err(PromotionError::InvalidConfigValueError {
                    field: format!("{}.regions", field),
                    value: format!("{:?}", promotion.regions),
                    reason: format!("{} is offered in every region", key),
                });
            }

            if promotion.all_regions == Some(true) && promotion.regions.is_some() {
                return Err(PromotionError::InvalidConfigValueError {
                    field: format!("{}.all_regions", field),
                    value: "true".to_string(),
                    reason: "Cannot be combined with an explicit regions list".to_string(),
                });
            }

            if let Some(regions) = &promotion.regions {
                for code in regions {
                    validate_country_code(&format!("{}.regions", field), code)?;
                }
            }

            if let Some(url) = &promotion.url {
                validate_url(&format!("{}.url", field), url)?;
            }
        }

        Ok(())
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
