use askama::Template;

use crate::cars::Vehicle;

pub const NO_RESULTS: &str = "No vehicles found matching your criteria.";

/// What a listing container currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerView {
	Loading,
	Loaded(Vec<Vehicle>),
	Empty,
	Error(String),
}

impl ContainerView {
	pub fn from_cars(cars: Vec<Vehicle>) -> Self {
		if cars.is_empty() {
			ContainerView::Empty
		} else {
			ContainerView::Loaded(cars)
		}
	}

	pub fn load_failed(err: impl std::fmt::Display, base_url: &str) -> Self {
		ContainerView::Error(format!(
			"Failed to load vehicles. Error: {}. Please ensure the backend is running at {}",
			err, base_url
		))
	}
}

/// Inner markup of a `car-grid` container. Served bare to the live filter
/// and embedded in the full pages.
#[derive(Template)]
#[template(path = "partials/car_grid.html")]
pub struct GridTemplate {
	pub view: ContainerView,
}

impl GridTemplate {
	pub fn new(view: ContainerView) -> Self {
		Self { view }
	}
}
