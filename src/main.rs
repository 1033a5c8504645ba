use clap::Parser;
use roster_summary::core::ConfigProvider;
use roster_summary::utils::{logger, validation::Validate};
use roster_summary::{
    CliConfig, LocalStorage, OllamaClient, SummaryEngine, SummaryPipeline, TomlConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting roster-summary CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let monitor_enabled = cli.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let toml_path = cli.config.clone();
    let result = match toml_path {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            match TomlConfig::from_file(&path) {
                Ok(config) => {
                    let monitor = monitor_enabled || config.monitoring_enabled();
                    run(config, monitor).await
                }
                Err(e) => Err(e),
            }
        }
        None => run(cli, monitor_enabled).await,
    };

    match result {
        Ok(output_path) => {
            tracing::info!("✅ Summary generated successfully!");
            tracing::info!("📁 Artifacts saved to: {}", output_path);
            println!("✅ Summary generated successfully!");
            println!("📁 Artifacts saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Summary generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                roster_summary::utils::error::ErrorSeverity::Low => 0,
                roster_summary::utils::error::ErrorSeverity::Medium => 2,
                roster_summary::utils::error::ErrorSeverity::High => 1,
                roster_summary::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run<C>(config: C, monitor_enabled: bool) -> roster_summary::Result<String>
where
    C: ConfigProvider + Validate + 'static,
{
    config.validate()?;

    let storage = LocalStorage::new(config.output_path().to_string());
    let model = OllamaClient::new(config.api_endpoint().to_string(), config.model().to_string());
    let pipeline = SummaryPipeline::new(storage, config, model);

    let engine = SummaryEngine::new_with_monitoring(pipeline, monitor_enabled);
    engine.run().await
}
