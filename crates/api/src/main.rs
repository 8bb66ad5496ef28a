use holdup_api::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    holdup_observability::init();

    let config = ServerConfig::from_env()?;
    holdup_api::app::serve(config).await
}
