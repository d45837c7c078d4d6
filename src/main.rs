use careform::adapters::SmtpMailer;
use careform::config::{RelayConfig, ServerCli};
use careform::core::relay::SubmissionRelay;
use careform::utils::{logger, validation::Validate};
use careform::server;
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = ServerCli::parse();

    logger::init_server_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting careform relay");
    if cli.verbose {
        tracing::debug!("CLI options: {:?}", cli);
    }

    let mut config = match &cli.config {
        Some(path) => RelayConfig::from_toml_file(path)?,
        None => RelayConfig::from_env()?,
    };
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mailer = SmtpMailer::from_config(&config)?;
    let bind_addr = config.bind_addr.clone();
    let relay = Arc::new(SubmissionRelay::new(mailer, config));
    let app = server::router(relay);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("✅ Relay listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
