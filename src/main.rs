use clap::Parser;
use cpf_list::utils::{logger, validation::Validate};
use cpf_list::{
    CliConfig, CpfPipeline, CpfProcessor, EtlEngine, LoadOutcome, LocalStorage, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 載入 TOML 配置
    let toml_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)
        }
        None => Ok(TomlConfig::default()),
    };

    let validated = toml_config.and_then(|toml| {
        toml.validate()?;
        config.merge_toml(&toml);
        config.validate()?;
        toml.processor_options()
    });

    let options = match validated {
        Ok(options) => options,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let storage = LocalStorage::new(".".to_string());
    let pipeline = CpfPipeline::with_processor(storage, config, CpfProcessor::new(options));
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(LoadOutcome::Stdout(json)) => println!("{}", json),
        Ok(LoadOutcome::Written(path)) => eprintln!("📁 Output saved to: {}", path),
        Err(e) => {
            tracing::error!(
                "❌ CPF processing failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
