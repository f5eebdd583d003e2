use thiserror::Error;

/// Failures while talking to the listings backend.
#[derive(Error, Debug)]
pub enum FetchError {
	#[error("{0}")]
	Network(#[from] reqwest::Error),

	#[error("HTTP error! status: {status}")]
	HttpStatus { status: u16 },

	#[error("invalid response body: {0}")]
	Parse(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("invalid {var}: {value:?} is not a port number")]
	InvalidPort { var: &'static str, value: String },

	#[error("invalid {var}: {value:?} is not an IP address")]
	InvalidBind { var: &'static str, value: String },

	#[error("invalid {var}: {value:?} must start with http:// or https://")]
	InvalidUrl { var: &'static str, value: String },

	#[error("invalid {var}: {value:?} is not a number of milliseconds")]
	InvalidTimeout { var: &'static str, value: String },
}
