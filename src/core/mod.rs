pub mod catalog;
pub mod output;
pub mod resolver;

pub use crate::domain::model::{ExternalWallet, PromotionKey, ResolvedPromotion, RewardsContext};
pub use crate::domain::ports::PromotionCatalog;
pub use crate::utils::error::Result;
