use clap::Parser;
use ollama_ask::utils::{logger, validation::Validate};
use ollama_ask::{AskRunner, CliConfig, Defaults, OllamaClient, RunConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting ollama-ask");
    tracing::debug!("CLI config: {:?}", cli);

    let config = RunConfig::from_cli(cli, &Defaults::default());

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("Error: {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let client = match OllamaClient::new(&config.host) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let fail_on_service_error = config.fail_on_service_error;
    let runner = AskRunner::new(client, config);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let outcome = runner.run(&mut stdout.lock(), &mut stderr.lock()).await?;

    tracing::debug!("Run finished: {:?}", outcome);

    let exit_code = outcome.exit_code(fail_on_service_error);
    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
