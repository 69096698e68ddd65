use crate::config::toml_config::CatalogConfig;
use crate::domain::model::{PromotionKey, Regions};
use crate::domain::ports::PromotionCatalog;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::collections::HashMap;
use std::sync::LazyLock;

const BITFLYER_VERIFICATION_REGIONS: &[&str] = &["JP"];

const GEMINI_REGIONS: &[&str] = &[
    "AR", "AT", "AU", "BE", "BG", "BM", "BR", "BS", "BT", "CA", "CH", "CL", "CY", "CZ", "DK", "EE",
    "EG", "ES", "FI", "GB", "GG", "GI", "GR", "HK", "HR", "HU", "IL", "IN", "IS", "IT", "JE", "KR",
    "KY", "LI", "LT", "LU", "LV", "MM", "MT", "NG", "NL", "NO", "NZ", "PE", "PH", "PL", "PT", "RO",
    "SE", "SG", "SI", "SK", "TR", "TW", "US", "UY", "VC", "VG", "VN", "ZA",
];

const TAP_NETWORK_REGIONS: &[&str] = &["US"];

const UPHOLD_CARD_REGIONS: &[&str] = &["US"];

const UPHOLD_EQUITIES_REGIONS: &[&str] = &[
    "AF", "AG", "AI", "AN", "AO", "AR", "AW", "AZ", "BB", "BD", "BF", "BH", "BI", "BJ", "BL", "BM",
    "BN", "BO", "BR", "BS", "BT", "BW", "BZ", "CF", "CI", "CK", "CL", "CM", "CN", "CO", "CR", "CV",
    "DJ", "DM", "DO", "DZ", "EC", "EH", "ER", "ET", "FJ", "FK", "FM", "GA", "GD", "GE", "GH", "GM",
    "GN", "GQ", "GS", "GT", "GW", "GY", "HK", "HN", "HT", "ID", "IN", "IO", "JM", "JO", "KE", "KG",
    "KH", "KI", "KM", "KN", "KR", "KW", "KY", "KZ", "LA", "LB", "LC", "LK", "LR", "LS", "LY", "MA",
    "MG", "MH", "ML", "MN", "MO", "MR", "MS", "MU", "MV", "MW", "MZ", "NA", "NE", "NG", "NI", "NP",
    "NR", "NU", "NZ", "OM", "PA", "PE", "PG", "PH", "PK", "PN", "PS", "PW", "PY", "QA", "RW", "SA",
    "SB", "SC", "SH", "SL", "SN", "SO", "SR", "ST", "SV", "SZ", "TC", "TD", "TG", "TH", "TJ", "TK",
    "TL", "TM", "TN", "TO", "TR", "TT", "TV", "TW", "TZ", "UG", "US", "UY", "UZ", "VC", "VE", "VG",
    "VN", "VU", "WS", "ZM", "ZW",
];

const BITFLYER_VERIFICATION_URL: &str = "https://support.brave.com/hc/en-us/articles/4403459972365-%E5%BA%83%E5%91%8A%E9%96%B2%E8%A6%A7%E5%A0%B1%E9%85%AC%E3%81%A7%E7%8D%B2%E5%BE%97%E3%81%97%E3%81%9FBAT%E3%81%AF%E5%BC%95%E3%81%8D%E5%87%BA%E3%81%99%E3%81%93%E3%81%A8%E3%81%8C%E3%81%A7%E3%81%8D%E3%81%BE%E3%81%99%E3%81%8B";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// `None` means offered in every region.
    pub regions: Option<Vec<String>>,
    pub url: String,
}

impl CatalogEntry {
    fn new(regions: Option<&[&str]>, url: &str) -> Self {
        Self {
            regions: regions.map(|codes| codes.iter().map(|code| code.to_string()).collect()),
            url: url.to_string(),
        }
    }

    fn regions(&self) -> Regions<'_> {
        match &self.regions {
            Some(codes) => Regions::Only(codes),
            None => Regions::All,
        }
    }
}

fn builtin_entry(key: PromotionKey) -> CatalogEntry {
    match key {
        PromotionKey::BitflyerVerification => CatalogEntry::new(
            Some(BITFLYER_VERIFICATION_REGIONS),
            BITFLYER_VERIFICATION_URL,
        ),
        PromotionKey::BraveCreators => CatalogEntry::new(None, "https://creators.brave.com"),
        PromotionKey::Gemini => {
            CatalogEntry::new(Some(GEMINI_REGIONS), "https://www.gemini.com/brave")
        }
        PromotionKey::TapNetwork => {
            CatalogEntry::new(Some(TAP_NETWORK_REGIONS), "https://brave.tapnetwork.io")
        }
        PromotionKey::UpholdCard => CatalogEntry::new(
            Some(UPHOLD_CARD_REGIONS),
            "https://uphold.com/brave/upholdcard",
        ),
        PromotionKey::UpholdEquities => CatalogEntry::new(
            Some(UPHOLD_EQUITIES_REGIONS),
            "https://uphold.com/en/buy-fractional-shares/brave",
        ),
    }
}

static BUILTIN_ENTRIES: LazyLock<HashMap<PromotionKey, CatalogEntry>> = LazyLock::new(|| {
    PromotionKey::ALL
        .iter()
        .map(|key| (*key, builtin_entry(*key)))
        .collect()
});

fn lookup(entries: &HashMap<PromotionKey, CatalogEntry>, key: PromotionKey) -> &CatalogEntry {
    // Both catalogs are built from PromotionKey::ALL, so every key is present.
    &entries[&key]
}

pub fn builtin_url(key: PromotionKey) -> &'static str {
    &lookup(&BUILTIN_ENTRIES, key).url
}

/// The compiled-in tables, shared by every caller in the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl PromotionCatalog for BuiltinCatalog {
    fn supported_regions(&self, key: PromotionKey) -> Regions<'_> {
        lookup(&BUILTIN_ENTRIES, key).regions()
    }

    fn destination_url(&self, key: PromotionKey) -> &str {
        builtin_url(key)
    }
}

/// Built-in tables with the overrides from a catalog file applied.
#[derive(Debug, Clone)]
pub struct ConfiguredCatalog {
    entries: HashMap<PromotionKey, CatalogEntry>,
}

impl ConfiguredCatalog {
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        config.validate()?;

        let mut entries = BUILTIN_ENTRIES.clone();
        for (name, promotion) in &config.promotions {
            let key: PromotionKey = name.parse()?;
            let entry = entries.entry(key).or_insert_with(|| builtin_entry(key));

            if promotion.all_regions == Some(true) {
                entry.regions = None;
            } else if let Some(regions) = &promotion.regions {
                entry.regions = Some(regions.clone());
            }
            if let Some(url) = &promotion.url {
                entry.url = url.clone();
            }
            tracing::debug!("Catalog override applied for {}", key);
        }

        tracing::info!(
            "Loaded promotion catalog '{}' with {} override(s)",
            config.name(),
            config.promotions.len()
        );
        Ok(Self { entries })
    }

    pub fn entry(&self, key: PromotionKey) -> &CatalogEntry {
        lookup(&self.entries, key)
    }
}

impl PromotionCatalog for ConfiguredCatalog {
    fn supported_regions(&self, key: PromotionKey) -> Regions<'_> {
        self.entry(key).regions()
    }

    fn destination_url(&self, key: PromotionKey) -> &str {
        &self.entry(key).url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_url_for_every_key() {
        for key in PromotionKey::ALL {
            let url = BuiltinCatalog.destination_url(*key);
            assert!(url.starts_with("https://"), "{} has url {}", key, url);
        }
    }

    #[test]
    fn test_builtin_regions() {
        assert_eq!(
            BuiltinCatalog.supported_regions(PromotionKey::BraveCreators),
            Regions::All
        );
        assert!(BuiltinCatalog.is_available(PromotionKey::BitflyerVerification, "JP"));
        assert!(!BuiltinCatalog.is_available(PromotionKey::BitflyerVerification, "US"));
        assert!(BuiltinCatalog.is_available(PromotionKey::Gemini, "GB"));
        assert!(!BuiltinCatalog.is_available(PromotionKey::Gemini, "JP"));
        assert!(BuiltinCatalog.is_available(PromotionKey::UpholdEquities, "US"));
        assert!(BuiltinCatalog.is_available(PromotionKey::UpholdEquities, "BR"));
        assert!(!BuiltinCatalog.is_available(PromotionKey::UpholdCard, "GB"));
    }

    #[test]
    fn test_region_tables_have_no_duplicates() {
        for table in [GEMINI_REGIONS, UPHOLD_EQUITIES_REGIONS] {
            let mut sorted = table.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), table.len());
        }
    }

    #[test]
    fn test_configured_catalog_applies_overrides() {
        let config = CatalogConfig::from_toml_str(
            r#"
[promotions.tap-network]
regions = ["US", "CA"]

[promotions.gemini]
url = "https://www.gemini.com/brave-new"
"#,
        )
        .unwrap();

        let catalog = ConfiguredCatalog::from_config(&config).unwrap();
        assert!(catalog.is_available(PromotionKey::TapNetwork, "CA"));
        assert_eq!(
            catalog.destination_url(PromotionKey::Gemini),
            "https://www.gemini.com/brave-new"
        );
        assert!(catalog.is_available(PromotionKey::Gemini, "GB"));
        assert_eq!(
            catalog.entry(PromotionKey::UpholdCard),
            &builtin_entry(PromotionKey::UpholdCard)
        );
    }

    #[test]
    fn test_configured_catalog_all_regions() {
        let config = CatalogConfig::from_toml_str(
            r#"
[promotions.uphold-card]
all_regions = true
"#,
        )
        .unwrap();

        let catalog = ConfiguredCatalog::from_config(&config).unwrap();
        assert_eq!(catalog.supported_regions(PromotionKey::UpholdCard), Regions::All);
        assert!(catalog.is_available(PromotionKey::UpholdCard, "ZZ"));
    }
}
