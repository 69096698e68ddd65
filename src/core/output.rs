use crate::domain::model::{PromotionKey, Regions, ResolvedPromotion};
use crate::domain::ports::PromotionCatalog;
use crate::utils::error::{PromotionError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// One catalog row as printed by `--list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogRow {
    pub key: PromotionKey,
    pub regions: String,
    pub url: String,
}

pub fn catalog_rows<C: PromotionCatalog>(catalog: &C) -> Vec<CatalogRow> {
    PromotionKey::ALL
        .iter()
        .map(|key| CatalogRow {
            key: *key,
            regions: match catalog.supported_regions(*key) {
                Regions::All => "*".to_string(),
                Regions::Only(codes) => codes.join(" "),
            },
            url: catalog.destination_url(*key).to_string(),
        })
        .collect()
}

pub fn render_promotions(promotions: &[ResolvedPromotion], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(promotions
            .iter()
            .map(|p| format!("{}\t{}\n", p.key, p.url))
            .collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(promotions)? + "\n"),
        OutputFormat::Csv => to_csv(promotions),
    }
}

pub fn render_catalog(rows: &[CatalogRow], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(rows
            .iter()
            .map(|row| format!("{}\t{}\t{}\n", row.key, row.url, row.regions))
            .collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)? + "\n"),
        OutputFormat::Csv => to_csv(rows),
    }
}

fn to_csv<T: Serialize>(records: &[T]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    let bytes = writer
        .into_inner()
        .map_err(|e| PromotionError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| PromotionError::InvalidConfigValueError {
        field: "output".to_string(),
        value: "csv".to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::BuiltinCatalog;

    fn sample() -> Vec<ResolvedPromotion> {
        vec![
            ResolvedPromotion {
                key: PromotionKey::BraveCreators,
                url: "https://creators.brave.com".to_string(),
            },
            ResolvedPromotion {
                key: PromotionKey::Gemini,
                url: "https://www.gemini.com/brave".to_string(),
            },
        ]
    }

    #[test]
    fn test_render_text() {
        let out = render_promotions(&sample(), OutputFormat::Text).unwrap();
        assert_eq!(
            out,
            "brave-creators\thttps://creators.brave.com\ngemini\thttps://www.gemini.com/brave\n"
        );
    }

    #[test]
    fn test_render_json() {
        let out = render_promotions(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["key"], "brave-creators");
        assert_eq!(value[1]["url"], "https://www.gemini.com/brave");
    }

    #[test]
    fn test_render_csv_has_header() {
        let out = render_promotions(&sample(), OutputFormat::Csv).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("key,url"));
        assert_eq!(lines.next(), Some("brave-creators,https://creators.brave.com"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_promotions(&[], OutputFormat::Text).unwrap(), "");
        assert_eq!(render_promotions(&[], OutputFormat::Json).unwrap(), "[]\n");
    }

    #[test]
    fn test_catalog_rows_cover_every_key() {
        let rows = catalog_rows(&BuiltinCatalog);
        assert_eq!(rows.len(), PromotionKey::ALL.len());

        let creators = rows
            .iter()
            .find(|row| row.key == PromotionKey::BraveCreators)
            .unwrap();
        assert_eq!(creators.regions, "*");

        let tap = rows
            .iter()
            .find(|row| row.key == PromotionKey::TapNetwork)
            .unwrap();
        assert_eq!(tap.regions, "US");

        let out = render_catalog(&rows, OutputFormat::Csv).unwrap();
        assert!(out.starts_with("key,regions,url\n"));
    }
}
