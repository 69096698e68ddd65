pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::CatalogConfig;
pub use core::catalog::{BuiltinCatalog, ConfiguredCatalog};
pub use core::output::OutputFormat;
pub use core::resolver::{promotion_url, resolve, PromotionResolver};
pub use domain::model::{
    ExternalWallet, PromotionKey, Regions, ResolvedPromotion, RewardsContext, WalletProvider,
    WalletStatus,
};
pub use domain::ports::PromotionCatalog;
pub use utils::error::{PromotionError, Result};
