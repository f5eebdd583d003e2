use log::{error, info};
use reqwest::{RequestBuilder, StatusCode};

use super::Vehicle;
use crate::{config::ApiConfig, error::FetchError, inquiry::Inquiry};

/// Which slice of `/api/cars` to ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarQuery {
	All,
	Featured,
	Make(String),
}

/// Backend client. Clones share one connection pool.
#[derive(Clone)]
pub struct CarsClient {
	http: reqwest::Client,
	api: ApiConfig,
}

impl CarsClient {
	pub fn new(api: ApiConfig) -> Result<Self, FetchError> {
		let mut builder = reqwest::Client::builder();
		if let Some(timeout) = api.timeout {
			builder = builder.timeout(timeout);
		}
		Ok(Self {
			http: builder.build()?,
			api,
		})
	}

	pub fn base_url(&self) -> &str {
		&self.api.base_url
	}

	fn url(&self, path: &str) -> String {
		format!("{}{}", self.api.base_url, path)
	}

	pub async fn list(&self, query: &CarQuery) -> Result<Vec<Vehicle>, FetchError> {
		let request = self.http.get(self.url("/api/cars"));
		let request = match query {
			CarQuery::All => request,
			CarQuery::Featured => request.query(&[("featured", "true")]),
			CarQuery::Make(make) => request.query(&[("make", make.as_str())]),
		};

		let body = self.read(request).await?;
		let cars: Vec<Vehicle> = serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;
		info!("Successfully loaded {} cars.", cars.len());
		Ok(cars)
	}

	/// `Ok(None)` when the backend answers 404.
	pub async fn get(&self, id: i64) -> Result<Option<Vehicle>, FetchError> {
		let request = self.http.get(self.url(&format!("/api/cars/{}", id)));
		match self.read(request).await {
			Ok(body) => serde_json::from_str(&body)
				.map(Some)
				.map_err(|e| FetchError::Parse(e.to_string())),
			Err(FetchError::HttpStatus { status }) if status == StatusCode::NOT_FOUND.as_u16() => Ok(None),
			Err(e) => Err(e),
		}
	}

	pub async fn post_inquiry(&self, inquiry: &Inquiry) -> Result<(), FetchError> {
		let request = self.http.post(self.url("/api/inquiry")).json(inquiry);
		self.read(request).await.map(|_| ())
	}

	async fn read(&self, request: RequestBuilder) -> Result<String, FetchError> {
		let request = request.build()?;
		info!("{} {}", request.method(), request.url());

		let response = self.http.execute(request).await.map_err(|e| {
			error!("request to {} failed: {}", self.api.base_url, e);
			FetchError::from(e)
		})?;

		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::HttpStatus { status: status.as_u16() });
		}
		Ok(response.text().await?)
	}
}
