//! Page bootstrap: which containers a page has, and filling them.

use std::collections::BTreeSet;

use crate::{
	cars::{CarsClient, Vehicle},
	listing::{self, fetch_listing, ListingKind, CATALOG_CARS, FEATURED_CARS},
	render::ContainerView,
	search::{filter_catalog, CatalogFilter},
};

pub const NAVBAR: &str = "navbar";
pub const MAKE_FILTER: &str = "make-filter";
pub const SEARCH_INPUT: &str = "search-input";
pub const CONTACT_FORM: &str = "global-contact-form";

pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarState {
	Top,
	Scrolled,
}

impl NavbarState {
	pub fn from_scroll(scroll_y: f64) -> Self {
		if scroll_y > SCROLL_THRESHOLD {
			NavbarState::Scrolled
		} else {
			NavbarState::Top
		}
	}

	pub fn class(self) -> &'static str {
		match self {
			NavbarState::Top => "navbar",
			NavbarState::Scrolled => "navbar scrolled",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
	Index,
	Catalog,
	Details,
}

/// Result of looking up the vehicle behind a details page.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailsView {
	Found(Vehicle),
	NotFound,
	Error(String),
}

#[derive(Debug)]
pub struct Page {
	pub kind: PageKind,
	elements: BTreeSet<&'static str>,
	pub filter: CatalogFilter,
	pub featured: ContainerView,
	pub catalog: ContainerView,
	/// Every make the backend knows, for the make filter.
	pub makes: Vec<String>,
	pub details: Option<DetailsView>,
}

impl Page {
	fn with(kind: PageKind, elements: &[&'static str]) -> Self {
		Self {
			kind,
			elements: elements.iter().copied().collect(),
			filter: CatalogFilter::default(),
			featured: ContainerView::Loading,
			catalog: ContainerView::Loading,
			makes: Vec::new(),
			details: None,
		}
	}

	pub fn index() -> Self {
		Self::with(PageKind::Index, &[NAVBAR, FEATURED_CARS, CONTACT_FORM])
	}

	pub fn catalog(filter: CatalogFilter) -> Self {
		let mut page = Self::with(PageKind::Catalog, &[NAVBAR, MAKE_FILTER, SEARCH_INPUT, CATALOG_CARS]);
		page.filter = filter;
		page
	}

	pub fn details(view: DetailsView) -> Self {
		let mut page = Self::with(PageKind::Details, &[NAVBAR, CONTACT_FORM]);
		page.details = Some(view);
		page
	}

	pub fn has(&self, id: &str) -> bool {
		self.elements.contains(id)
	}
}

/// Fills every listing container the page has. The featured and catalog
/// fetches run concurrently. A filtered catalog also lists the unfiltered
/// makes so the make filter can switch away from the current one.
pub async fn bootstrap(page: &mut Page, client: &CarsClient) {
	let featured = async {
		if page.has(FEATURED_CARS) {
			Some(fetch_listing(client, ListingKind::Featured).await)
		} else {
			None
		}
	};
	let catalog = async {
		if !page.has(CATALOG_CARS) {
			return None;
		}
		if page.filter.is_blank() {
			let view = fetch_listing(client, ListingKind::Catalog).await;
			let makes = listing::makes_of(&view);
			Some((view, makes))
		} else {
			Some(tokio::join!(filter_catalog(client, &page.filter), listing::fetch_makes(client)))
		}
	};
	let (featured, catalog) = tokio::join!(featured, catalog);

	if let Some(view) = featured {
		page.featured = view;
	}
	if let Some((view, makes)) = catalog {
		page.catalog = view;
		page.makes = makes;
	}
}
