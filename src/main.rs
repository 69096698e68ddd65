use anyhow::Context;
use clap::Parser;
use rewards_promotions::core::output::{catalog_rows, render_catalog, render_promotions};
use rewards_promotions::utils::{logger, validation::Validate};
use rewards_promotions::{
    CatalogConfig, CliConfig, ConfiguredCatalog, PromotionCatalog, PromotionResolver,
};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let catalog_config = match &config.catalog {
        Some(path) => CatalogConfig::from_file(path)
            .with_context(|| format!("failed to load catalog '{}'", path.display()))?,
        None => CatalogConfig::default(),
    };
    let catalog = ConfiguredCatalog::from_config(&catalog_config)
        .map_err(|e| anyhow::anyhow!("{} ({})", e, e.recovery_suggestion()))?;

    let output = run(&config, PromotionResolver::new(catalog))?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn run<C: PromotionCatalog>(
    config: &CliConfig,
    resolver: PromotionResolver<C>,
) -> anyhow::Result<String> {
    if config.list {
        let rows = catalog_rows(resolver.catalog());
        return Ok(render_catalog(&rows, config.format)?);
    }

    let context = config
        .rewards_context()
        .map_err(|e| anyhow::anyhow!("{}: {}", e.user_friendly_message(), e))?;
    tracing::info!(
        "Resolving promotions for country={} mobile={}",
        context.country_code,
        context.is_mobile_platform
    );

    let promotions = resolver.resolve_with_urls(&context);
    if promotions.is_empty() {
        tracing::info!("No promotions available for {}", context.country_code);
    }
    Ok(render_promotions(&promotions, config.format)?)
}
