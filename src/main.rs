use clap::Parser;
use s3_browser::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::parse();
    log::debug!("Starting with {:?}", config);
    s3_browser::serve(config).await
}
