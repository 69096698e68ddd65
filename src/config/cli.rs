use crate::core::output::OutputFormat;
use crate::domain::model::{ExternalWallet, RewardsContext, WalletProvider};
use crate::utils::error::{PromotionError, Result};
use crate::utils::validation::{validate_country_code, validate_required_field, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "rewards-promotions")]
#[command(about = "Resolve which reward promotions to show for an account")]
pub struct CliConfig {
    /// Two-letter country code of the account
    #[arg(long, conflicts_with = "context")]
    pub country: Option<String>,

    /// Provider of the linked external wallet, if any
    #[arg(long, value_parser = parse_provider, conflicts_with = "context")]
    pub provider: Option<WalletProvider>,

    /// Resolve for the mobile (Android) rewards page
    #[arg(long, conflicts_with = "context")]
    pub mobile: bool,

    /// JSON file holding a full rewards context
    #[arg(long)]
    pub context: Option<PathBuf>,

    /// TOML file overriding the built-in promotion catalog
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the whole catalog instead of resolving
    #[arg(long)]
    pub list: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

fn parse_provider(value: &str) -> std::result::Result<WalletProvider, String> {
    value
        .parse::<WalletProvider>()
        .map_err(|e| e.to_string())
}

impl CliConfig {
    /// Builds the resolver input from `--context` or the individual flags.
    pub fn rewards_context(&self) -> Result<RewardsContext> {
        if let Some(path) = &self.context {
            let content = std::fs::read_to_string(path)?;
            let context: RewardsContext = serde_json::from_str(&content)?;
            validate_country_code("context.country_code", &context.country_code)?;
            return Ok(context);
        }

        let country = validate_required_field("--country", &self.country)?;
        Ok(RewardsContext {
            country_code: country.clone(),
            external_wallet: self.provider.map(ExternalWallet::new),
            is_mobile_platform: self.mobile,
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(country) = &self.country {
            validate_country_code("--country", country)?;
        }
        if !self.list && self.country.is_none() && self.context.is_none() {
            return Err(PromotionError::MissingConfigError {
                field: "--country".to_string(),
            });
        }
        Ok(())
    }
}
