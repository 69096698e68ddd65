use crate::utils::error::PromotionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A reward promotion that the rewards page can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromotionKey {
    BitflyerVerification,
    BraveCreators,
    Gemini,
    TapNetwork,
    UpholdCard,
    UpholdEquities,
}

impl PromotionKey {
    pub const ALL: &'static [PromotionKey] = &[
        PromotionKey::BitflyerVerification,
        PromotionKey::BraveCreators,
        PromotionKey::Gemini,
        PromotionKey::TapNetwork,
        PromotionKey::UpholdCard,
        PromotionKey::UpholdEquities,
    ];

    /// The one promotion offered in every region.
    pub const VALID_EVERYWHERE: PromotionKey = PromotionKey::BraveCreators;

    pub fn as_str(self) -> &'static str {
        match self {
            PromotionKey::BitflyerVerification => "bitflyer-verification",
            PromotionKey::BraveCreators => "brave-creators",
            PromotionKey::Gemini => "gemini",
            PromotionKey::TapNetwork => "tap-network",
            PromotionKey::UpholdCard => "uphold-card",
            PromotionKey::UpholdEquities => "uphold-equities",
        }
    }

    pub fn is_valid_everywhere(self) -> bool {
        self == Self::VALID_EVERYWHERE
    }
}

impl fmt::Display for PromotionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromotionKey {
    type Err = PromotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PromotionKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| PromotionError::UnknownPromotionKey(s.to_string()))
    }
}

/// Custodial providers a rewards wallet can be linked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletProvider {
    Uphold,
    Bitflyer,
    Gemini,
}

impl WalletProvider {
    pub const ALL: &'static [WalletProvider] = &[
        WalletProvider::Uphold,
        WalletProvider::Bitflyer,
        WalletProvider::Gemini,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WalletProvider::Uphold => "uphold",
            WalletProvider::Bitflyer => "bitflyer",
            WalletProvider::Gemini => "gemini",
        }
    }
}

impl fmt::Display for WalletProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WalletProvider {
    type Err = PromotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WalletProvider::ALL
            .iter()
            .copied()
            .find(|provider| provider.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PromotionError::UnknownWalletProvider(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WalletStatus {
    NotConnected,
    #[default]
    Connected,
    Verified,
    DisconnectedNotVerified,
    DisconnectedVerified,
    Pending,
}

/// A linked custodial wallet. Owned by the caller; the resolver only reads `provider`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalWallet {
    pub provider: WalletProvider,
    #[serde(default)]
    pub status: WalletStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl ExternalWallet {
    pub fn new(provider: WalletProvider) -> Self {
        Self {
            provider,
            status: WalletStatus::default(),
            user_name: None,
        }
    }
}

/// Snapshot of the caller state the resolver needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardsContext {
    pub country_code: String,
    #[serde(default)]
    pub external_wallet: Option<ExternalWallet>,
    #[serde(default)]
    pub is_mobile_platform: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPromotion {
    pub key: PromotionKey,
    pub url: String,
}

/// Countries a promotion is offered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regions<'a> {
    All,
    Only(&'a [String]),
}

impl Regions<'_> {
    pub fn contains(&self, country_code: &str) -> bool {
        match self {
            Regions::All => true,
            Regions::Only(codes) => codes.iter().any(|code| code == country_code),
        }
    }
}
