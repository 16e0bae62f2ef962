use log::info;
use tokio::net::TcpListener;

use recipe_gateway::config::Settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load()?;
    info!("Forwarding extraction requests to {}", settings.upstream_url);

    let app = recipe_gateway::app(&settings)?;

    let listener = TcpListener::bind(&settings.listen_addr).await?;
    info!("Listening on {}", settings.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
