use std::collections::BTreeSet;

use log::{error, warn};

use crate::{
	cars::{CarQuery, CarsClient},
	render::view::ContainerView,
};

pub const FEATURED_CARS: &str = "featured-cars";
pub const CATALOG_CARS: &str = "catalog-cars";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
	Featured,
	Catalog,
}

impl ListingKind {
	fn query(self) -> CarQuery {
		match self {
			ListingKind::Featured => CarQuery::Featured,
			ListingKind::Catalog => CarQuery::All,
		}
	}
}

pub async fn fetch_listing(client: &CarsClient, kind: ListingKind) -> ContainerView {
	match client.list(&kind.query()).await {
		Ok(cars) => ContainerView::from_cars(cars),
		Err(e) => {
			error!("Error fetching cars: {}", e);
			ContainerView::load_failed(e, client.base_url())
		}
	}
}

/// Distinct makes in a loaded view, sorted.
pub fn makes_of(view: &ContainerView) -> Vec<String> {
	match view {
		ContainerView::Loaded(cars) => cars
			.iter()
			.map(|car| car.make.clone())
			.collect::<BTreeSet<_>>()
			.into_iter()
			.collect(),
		_ => Vec::new(),
	}
}

/// Every make in the unfiltered catalog. Empty if the backend is down.
pub async fn fetch_makes(client: &CarsClient) -> Vec<String> {
	match client.list(&CarQuery::All).await {
		Ok(cars) => makes_of(&ContainerView::from_cars(cars)),
		Err(e) => {
			warn!("could not list makes: {}", e);
			Vec::new()
		}
	}
}
