use anyhow::Context;
use profile_core::{Controller, DisplayHandle, LookupClient, LookupService};
use profile_finder::{config::load_settings, transport::ReqwestTransport};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings();
    let client = LookupClient::new(&settings.api_base_url)
        .with_context(|| format!("bad api base url '{}'", settings.api_base_url))?
        .with_user_agent(settings.user_agent.clone());
    let transport = ReqwestTransport::new().context("failed to build HTTP client")?;
    let controller = Controller::new(LookupService::new(client, transport), DisplayHandle::new());

    let listener = TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;
    info!(
        addr = %settings.bind_addr,
        api = %settings.api_base_url,
        "profile finder listening"
    );

    axum::serve(listener, profile_finder::app(controller)).await?;
    Ok(())
}
