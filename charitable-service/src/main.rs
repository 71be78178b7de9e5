use charitable::{
    HashMapAuthGateway, adapters::config::Settings, axum, router, telemetry::init_tracing,
};
use color_eyre::eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let settings = Settings::load()?;
    init_tracing(&settings.telemetry.filter)?;

    let gateway = HashMapAuthGateway::with_accounts(settings.auth.demo_credentials()?);
    let app = router(gateway);

    let listener = tokio::net::TcpListener::bind(settings.app.address.as_str()).await?;
    tracing::info!(address = %settings.app.address, "Starting charitable service...");

    axum::serve(listener, app).await?;

    Ok(())
}
