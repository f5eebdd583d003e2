use log::{error, info};
use serde::Deserialize;

use crate::{
	cars::{CarQuery, CarsClient, Vehicle},
	render::view::ContainerView,
};

/// Catalog filter inputs. The backend only filters by make, so the free-text
/// term is applied here over whatever the make query returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogFilter {
	#[serde(default)]
	pub make: String,
	#[serde(default)]
	pub search: String,
}

impl CatalogFilter {
	pub fn new(make: impl Into<String>, search: impl Into<String>) -> Self {
		Self {
			make: make.into(),
			search: search.into(),
		}
	}

	pub fn is_blank(&self) -> bool {
		self.make.is_empty() && self.search.is_empty()
	}

	/// Narrows an already-fetched set by the free-text term.
	pub fn narrow(&self, cars: Vec<Vehicle>) -> Vec<Vehicle> {
		if self.search.is_empty() {
			return cars;
		}
		let term = self.search.to_lowercase();
		cars.into_iter().filter(|car| matches_term(car, &term)).collect()
	}
}

/// `term` must already be lowercase.
pub fn matches_term(car: &Vehicle, term: &str) -> bool {
	car.model.to_lowercase().contains(term) || car.make.to_lowercase().contains(term)
}

pub async fn filter_catalog(client: &CarsClient, filter: &CatalogFilter) -> ContainerView {
	match client.list(&CarQuery::Make(filter.make.clone())).await {
		Ok(cars) => {
			let fetched = cars.len();
			let cars = filter.narrow(cars);
			info!("filter make={:?} search={:?}: {} of {} cars", filter.make, filter.search, cars.len(), fetched);
			ContainerView::from_cars(cars)
		}
		Err(e) => {
			error!("Filtering error: {}", e);
			ContainerView::load_failed(e, client.base_url())
		}
	}
}
