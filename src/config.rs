use std::{env, net::IpAddr, time::Duration};

use crate::error::ConfigError;

pub const LOCAL_API: &str = "http://127.0.0.1:5000";
pub const DEPLOYED_API: &str = "https://your-backend-api.onrender.com";

/// Picks the backend for the host the pages are served under.
pub fn resolve_api_base(page_host: &str, deployed: &str) -> String {
	match page_host {
		"127.0.0.1" | "localhost" => LOCAL_API.to_string(),
		_ => deployed.trim_end_matches('/').to_string(),
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
	pub base_url: String,
	pub timeout: Option<Duration>,
}

impl ApiConfig {
	pub fn new(base_url: impl Into<String>) -> Self {
		let base_url: String = base_url.into();
		Self {
			base_url: base_url.trim_end_matches('/').to_string(),
			timeout: None,
		}
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}
}

#[derive(Debug, Clone)]
pub struct AppConfig {
	pub bind: IpAddr,
	pub port: u16,
	pub api: ApiConfig,
}

impl AppConfig {
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| env::var(key).ok())
	}

	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let port = match lookup("PORT") {
			Some(value) => value
				.parse::<u16>()
				.map_err(|_| ConfigError::InvalidPort { var: "PORT", value })?,
			None => 4000,
		};

		let bind = match lookup("SHOWROOM_BIND") {
			Some(value) => value
				.parse::<IpAddr>()
				.map_err(|_| ConfigError::InvalidBind { var: "SHOWROOM_BIND", value })?,
			None => IpAddr::from([0, 0, 0, 0]),
		};

		let base_url = match lookup("SHOWROOM_API_BASE_URL") {
			Some(value) => checked_url("SHOWROOM_API_BASE_URL", value)?,
			None => {
				let host = lookup("SHOWROOM_PAGE_HOST").unwrap_or_else(|| "localhost".to_string());
				let deployed = match lookup("SHOWROOM_DEPLOYED_API") {
					Some(value) => checked_url("SHOWROOM_DEPLOYED_API", value)?,
					None => DEPLOYED_API.to_string(),
				};
				resolve_api_base(&host, &deployed)
			}
		};

		let mut api = ApiConfig::new(base_url);
		if let Some(value) = lookup("SHOWROOM_API_TIMEOUT_MS") {
			let ms = value.parse::<u64>().map_err(|_| ConfigError::InvalidTimeout {
				var: "SHOWROOM_API_TIMEOUT_MS",
				value,
			})?;
			api = api.with_timeout(Duration::from_millis(ms));
		}

		Ok(Self { bind, port, api })
	}
}

fn checked_url(var: &'static str, value: String) -> Result<String, ConfigError> {
	if value.starts_with("http://") || value.starts_with("https://") {
		Ok(value)
	} else {
		Err(ConfigError::InvalidUrl { var, value })
	}
}
