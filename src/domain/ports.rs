use crate::domain::model::{PromotionKey, Regions};

/// Availability and destination data for every promotion.
pub trait PromotionCatalog: Send + Sync {
    fn supported_regions(&self, key: PromotionKey) -> Regions<'_>;

    fn destination_url(&self, key: PromotionKey) -> &str;

    fn is_available(&self, key: PromotionKey, country_code: &str) -> bool {
        key.is_valid_everywhere() || self.supported_regions(key).contains(country_code)
    }
}
