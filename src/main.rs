use anirec::application::config::AppConfig;
use anirec::application::service::RecommendService;
use anirec::infrastructure::storage::open_dataset_source;
use anirec::interface::http;
use std::error::Error;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;
    config.log();

    let source = open_dataset_source(&config.dataset_path, config.dataset_format);
    let service = RecommendService::load(config.service_config(), source.as_ref())?;

    http::serve(config.addr.clone(), service).await?;
    Ok(())
}
