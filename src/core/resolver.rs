//! Decides which reward promotions to show and in what order.
//!
//! Candidates are listed highest priority first. The desktop list is the
//! result of inserting at the front in the order `tap-network`, the
//! wallet-dependent offers, `gemini`, `brave-creators`, so the last insert
//! leads.

use crate::core::catalog::{builtin_url, BuiltinCatalog};
use crate::domain::model::{
    ExternalWallet, PromotionKey, ResolvedPromotion, RewardsContext, WalletProvider,
};
use crate::domain::ports::PromotionCatalog;

const MOBILE_UNLINKED: &[PromotionKey] = &[PromotionKey::BitflyerVerification];

const DESKTOP_UNLINKED: &[PromotionKey] = &[
    PromotionKey::BraveCreators,
    PromotionKey::Gemini,
    PromotionKey::UpholdEquities,
    PromotionKey::TapNetwork,
];

const DESKTOP_UPHOLD: &[PromotionKey] = &[
    PromotionKey::BraveCreators,
    PromotionKey::Gemini,
    PromotionKey::UpholdEquities,
    PromotionKey::UpholdCard,
    PromotionKey::TapNetwork,
];

const DESKTOP_OTHER_PROVIDER: &[PromotionKey] = &[
    PromotionKey::BraveCreators,
    PromotionKey::Gemini,
    PromotionKey::TapNetwork,
];

/// Ordered candidates before region filtering.
pub fn candidate_promotions(
    external_wallet: Option<&ExternalWallet>,
    is_mobile_platform: bool,
) -> &'static [PromotionKey] {
    match (is_mobile_platform, external_wallet.map(|w| w.provider)) {
        (true, None) => MOBILE_UNLINKED,
        (true, Some(_)) => &[],
        (false, None) => DESKTOP_UNLINKED,
        (false, Some(WalletProvider::Uphold)) => DESKTOP_UPHOLD,
        (false, Some(_)) => DESKTOP_OTHER_PROVIDER,
    }
}

#[derive(Debug, Clone, Default)]
pub struct PromotionResolver<C: PromotionCatalog> {
    catalog: C,
}

impl PromotionResolver<BuiltinCatalog> {
    pub fn builtin() -> Self {
        Self::new(BuiltinCatalog)
    }
}

impl<C: PromotionCatalog> PromotionResolver<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Promotions to show for this account, highest priority first.
    ///
    /// Unknown country codes match no allow-list, so only promotions offered
    /// everywhere survive.
    pub fn resolve(
        &self,
        country_code: &str,
        external_wallet: Option<&ExternalWallet>,
        is_mobile_platform: bool,
    ) -> Vec<PromotionKey> {
        let promotions: Vec<PromotionKey> =
            candidate_promotions(external_wallet, is_mobile_platform)
                .iter()
                .copied()
                .filter(|key| self.catalog.is_available(*key, country_code))
                .collect();

        tracing::debug!(
            country = country_code,
            provider = external_wallet.map(|w| w.provider.as_str()),
            mobile = is_mobile_platform,
            "Resolved {} promotion(s): {:?}",
            promotions.len(),
            promotions
        );
        promotions
    }

    pub fn resolve_context(&self, context: &RewardsContext) -> Vec<PromotionKey> {
        self.resolve(
            &context.country_code,
            context.external_wallet.as_ref(),
            context.is_mobile_platform,
        )
    }

    pub fn resolve_with_urls(&self, context: &RewardsContext) -> Vec<ResolvedPromotion> {
        self.resolve_context(context)
            .into_iter()
            .map(|key| ResolvedPromotion {
                key,
                url: self.catalog.destination_url(key).to_string(),
            })
            .collect()
    }

    pub fn destination_url(&self, key: PromotionKey) -> &str {
        self.catalog.destination_url(key)
    }
}

/// [`PromotionResolver::resolve`] against the built-in catalog.
pub fn resolve(
    country_code: &str,
    external_wallet: Option<&ExternalWallet>,
    is_mobile_platform: bool,
) -> Vec<PromotionKey> {
    PromotionResolver::builtin().resolve(country_code, external_wallet, is_mobile_platform)
}

/// Destination link for a promotion card, from the built-in catalog.
pub fn promotion_url(key: PromotionKey) -> &'static str {
    builtin_url(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn uphold() -> ExternalWallet {
        ExternalWallet::new(WalletProvider::Uphold)
    }

    #[test]
    fn test_candidate_lists_have_no_duplicates() {
        for list in [
            MOBILE_UNLINKED,
            DESKTOP_UNLINKED,
            DESKTOP_UPHOLD,
            DESKTOP_OTHER_PROVIDER,
        ] {
            let unique: HashSet<_> = list.iter().collect();
            assert_eq!(unique.len(), list.len());
        }
    }

    #[test]
    fn test_mobile_unlinked_japan() {
        assert_eq!(
            resolve("JP", None, true),
            vec![PromotionKey::BitflyerVerification]
        );
    }

    #[test]
    fn test_mobile_outside_japan_is_empty() {
        assert!(resolve("US", None, true).is_empty());
    }

    #[test]
    fn test_mobile_linked_is_empty() {
        let wallet = ExternalWallet::new(WalletProvider::Bitflyer);
        assert!(resolve("JP", Some(&wallet), true).is_empty());
    }

    #[test]
    fn test_desktop_us_unlinked_order() {
        assert_eq!(
            resolve("US", None, false),
            vec![
                PromotionKey::BraveCreators,
                PromotionKey::Gemini,
                PromotionKey::UpholdEquities,
                PromotionKey::TapNetwork,
            ]
        );
    }

    #[test]
    fn test_desktop_us_uphold_order() {
        assert_eq!(
            resolve("US", Some(&uphold()), false),
            vec![
                PromotionKey::BraveCreators,
                PromotionKey::Gemini,
                PromotionKey::UpholdEquities,
                PromotionKey::UpholdCard,
                PromotionKey::TapNetwork,
            ]
        );
    }

    #[test]
    fn test_desktop_other_provider_skips_uphold_offers() {
        let wallet = ExternalWallet::new(WalletProvider::Gemini);
        assert_eq!(
            resolve("US", Some(&wallet), false),
            vec![
                PromotionKey::BraveCreators,
                PromotionKey::Gemini,
                PromotionKey::TapNetwork,
            ]
        );
    }

    #[test]
    fn test_unknown_region_keeps_only_creators() {
        assert_eq!(
            resolve("ZZ", None, false),
            vec![PromotionKey::BraveCreators]
        );
    }

    #[test]
    fn test_region_filter_keeps_priority_order() {
        // Brazil: gemini and equities, no US-only offers
        assert_eq!(
            resolve("BR", Some(&uphold()), false),
            vec![
                PromotionKey::BraveCreators,
                PromotionKey::Gemini,
                PromotionKey::UpholdEquities,
            ]
        );
    }

    #[test]
    fn test_resolve_with_urls_pairs_keys() {
        let context = RewardsContext {
            country_code: "JP".to_string(),
            external_wallet: None,
            is_mobile_platform: true,
        };
        let resolved = PromotionResolver::builtin().resolve_with_urls(&context);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].key, PromotionKey::BitflyerVerification);
        assert_eq!(resolved[0].url, promotion_url(PromotionKey::BitflyerVerification));
    }
}
