use anyhow::Result;
use nycparking::{config, export, SodaClient};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    let client = SodaClient::new(config::DATA_DOMAIN, config::APP_TOKEN)?;
    export::run_all(&client).await?;

    info!("all exports complete");
    Ok(())
}
