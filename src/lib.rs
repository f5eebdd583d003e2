use axum::{
	routing::{get, post},
	Router,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub mod cars;
pub mod config;
pub mod error;
pub mod inquiry;
pub mod listing;
pub mod page;
pub mod render;
pub mod routes;
pub mod search;

use cars::CarsClient;

#[derive(Clone)]
pub struct AppState {
	pub client: CarsClient,
}

impl AppState {
	pub fn new(client: CarsClient) -> Self {
		Self { client }
	}
}

pub fn build_app(state: AppState) -> Router {
	Router::new()
		.route("/", get(routes::index))
		.route("/index.html", get(routes::index))
		.route("/catalog", get(routes::catalog))
		.route("/catalog.html", get(routes::catalog))
		.route("/catalog/cars", get(routes::catalog_cars))
		.route("/details.html", get(routes::details))
		.route("/contact", post(routes::contact))
		.fallback(routes::not_found)
		.layer(CorsLayer::permissive())
		.with_state(state)
}

pub async fn run_server(listener: TcpListener, app: Router) -> std::io::Result<()> {
	axum::serve(listener, app).await
}
