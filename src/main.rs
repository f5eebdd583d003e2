use anyhow::Context;
use log::info;
use showroom::{build_app, cars::CarsClient, config::AppConfig, run_server, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = AppConfig::from_env().context("invalid configuration")?;
	let client = CarsClient::new(config.api.clone()).context("failed to build backend client")?;
	info!("listings backend: {}", client.base_url());

	let app = build_app(AppState::new(client));
	let listener = TcpListener::bind((config.bind, config.port))
		.await
		.with_context(|| format!("failed to bind {}:{}", config.bind, config.port))?;
	info!("showroom listening on {}", listener.local_addr()?);

	run_server(listener, app).await.context("server failed")
}
