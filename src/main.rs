use clap::Parser;
use landscape_gen::utils::{logger, validation::Validate};
use landscape_gen::{CliConfig, Engine, LandscapePipeline, LocalStorage, LogoResolver};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting landscape-gen");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let logos = match &config.logo_dir {
        Some(dir) => LogoResolver::download_into(dir, std::env::current_dir()?)?,
        None => LogoResolver::keep_urls(),
    };

    let storage = LocalStorage::new();
    let pipeline = LandscapePipeline::new(storage, config, logos);
    let engine = Engine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("Generated {}", output_path);
        }
        Err(e) => {
            tracing::error!("Landscape generation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
