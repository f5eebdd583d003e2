use std::collections::BTreeSet;

use askama::Template;

use super::view::GridTemplate;
use crate::{
	inquiry::{InquiryOutcome, FAILED},
	page::{DetailsView, NavbarState, Page, SCROLL_THRESHOLD},
	search::CatalogFilter,
};

const SITE: &str = "Luxury Motors";

/// Title and navbar shared by every page.
pub struct Chrome {
	pub title: String,
}

impl Chrome {
	fn new(title: impl Into<String>) -> Self {
		Self { title: title.into() }
	}

	pub fn navbar_class(&self) -> &'static str {
		NavbarState::Top.class()
	}

	pub fn scroll_threshold(&self) -> f64 {
		SCROLL_THRESHOLD
	}
}

/// The contact form and the notice slot above it. The form itself always
/// renders empty; a submission result only sets the notice.
pub struct ContactForm {
	pub car_id: Option<i64>,
	pub notice: Option<InquiryOutcome>,
}

impl ContactForm {
	pub fn notice_class(&self) -> &'static str {
		match self.notice {
			Some(InquiryOutcome::Received) => "notice success",
			Some(InquiryOutcome::Failed) => "notice error",
			None => "notice",
		}
	}

	pub fn notice_text(&self) -> &'static str {
		self.notice.map(InquiryOutcome::notice).unwrap_or("")
	}

	pub fn failed_notice(&self) -> &'static str {
		FAILED
	}
}

pub struct MakeOption {
	pub name: String,
	pub selected: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
	pub chrome: Chrome,
	pub featured: GridTemplate,
	pub contact: ContactForm,
}

impl IndexTemplate {
	pub fn new(page: Page, notice: Option<InquiryOutcome>) -> Self {
		Self {
			chrome: Chrome::new(SITE),
			featured: GridTemplate::new(page.featured),
			contact: ContactForm { car_id: None, notice },
		}
	}
}

#[derive(Template)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate {
	pub chrome: Chrome,
	pub filter: CatalogFilter,
	pub makes: Vec<MakeOption>,
	pub catalog: GridTemplate,
}

impl CatalogTemplate {
	pub fn new(page: Page) -> Self {
		// The selected make stays on offer even when the backend no longer has it.
		let mut makes: BTreeSet<String> = page.makes.into_iter().collect();
		if !page.filter.make.is_empty() {
			makes.insert(page.filter.make.clone());
		}
		let makes = makes
			.into_iter()
			.map(|name| MakeOption {
				selected: name == page.filter.make,
				name,
			})
			.collect();

		Self {
			chrome: Chrome::new(format!("Catalog | {}", SITE)),
			filter: page.filter,
			makes,
			catalog: GridTemplate::new(page.catalog),
		}
	}
}

#[derive(Template)]
#[template(path = "details.html")]
pub struct DetailsTemplate {
	pub chrome: Chrome,
	pub details: DetailsView,
	pub contact: ContactForm,
}

impl DetailsTemplate {
	pub fn new(page: Page, notice: Option<InquiryOutcome>) -> Self {
		let details = page.details.unwrap_or(DetailsView::NotFound);
		let (title, car_id) = match &details {
			DetailsView::Found(car) => (format!("{} | {}", car.title(), SITE), Some(car.id)),
			_ => (format!("Vehicle | {}", SITE), None),
		};
		Self {
			chrome: Chrome::new(title),
			details,
			contact: ContactForm { car_id, notice },
		}
	}
}
