use axum::{
	extract::{Form, Query, State},
	http::{header::ACCEPT, HeaderMap, HeaderName, HeaderValue},
	response::{IntoResponse, Redirect, Response},
	Json,
};
use hyper::StatusCode;
use log::{error, info};
use serde::Deserialize;
use serde_json::json;

use crate::{
	inquiry::{submit_inquiry, InquiryForm, InquiryOutcome},
	page::{bootstrap, DetailsView, Page},
	render::{CatalogTemplate, DetailsTemplate, GridTemplate, IndexTemplate},
	search::{filter_catalog, CatalogFilter},
	AppState,
};

pub const FILTER_SEQ: &str = "x-filter-seq";

#[derive(Deserialize)]
pub struct NoticeParams {
	inquiry: Option<String>,
}

impl NoticeParams {
	fn outcome(&self) -> Option<InquiryOutcome> {
		self.inquiry.as_deref().and_then(InquiryOutcome::from_param)
	}
}

pub async fn index(state: State<AppState>, params: Query<NoticeParams>) -> IndexTemplate {
	let mut page = Page::index();
	bootstrap(&mut page, &state.client).await;
	IndexTemplate::new(page, params.outcome())
}

pub async fn catalog(state: State<AppState>, filter: Query<CatalogFilter>) -> CatalogTemplate {
	let mut page = Page::catalog(filter.0);
	bootstrap(&mut page, &state.client).await;
	CatalogTemplate::new(page)
}

#[derive(Deserialize)]
pub struct FilterParams {
	#[serde(default)]
	make: String,
	#[serde(default)]
	search: String,
	seq: Option<String>,
}

/// Bare `catalog-cars` content for the live filter. Echoes `seq` back so the
/// page can drop responses that arrive out of order.
pub async fn catalog_cars(state: State<AppState>, params: Query<FilterParams>) -> Response {
	let params = params.0;
	let filter = CatalogFilter::new(params.make, params.search);
	let view = filter_catalog(&state.client, &filter).await;

	let mut response = GridTemplate::new(view).into_response();
	if let Some(seq) = params.seq.and_then(|s| s.parse::<u64>().ok()) {
		response
			.headers_mut()
			.insert(HeaderName::from_static(FILTER_SEQ), HeaderValue::from(seq));
	}
	response
}

#[derive(Deserialize)]
pub struct DetailsParams {
	id: Option<String>,
	inquiry: Option<String>,
}

pub async fn details(state: State<AppState>, params: Query<DetailsParams>) -> (StatusCode, DetailsTemplate) {
	let params = params.0;
	let notice = params.inquiry.as_deref().and_then(InquiryOutcome::from_param);
	let id = params.id.and_then(|id| id.parse::<i64>().ok());
	let (status, view) = match id {
		Some(id) => lookup(&state, id).await,
		None => (StatusCode::NOT_FOUND, DetailsView::NotFound),
	};
	(status, DetailsTemplate::new(Page::details(view), notice))
}

async fn lookup(state: &AppState, id: i64) -> (StatusCode, DetailsView) {
	match state.client.get(id).await {
		Ok(Some(car)) => (StatusCode::OK, DetailsView::Found(car)),
		Ok(None) => (StatusCode::NOT_FOUND, DetailsView::NotFound),
		Err(e) => {
			error!("Error fetching car {}: {}", id, e);
			let message = format!(
				"Failed to load vehicle. Error: {}. Please ensure the backend is running at {}",
				e,
				state.client.base_url()
			);
			(StatusCode::BAD_GATEWAY, DetailsView::Error(message))
		}
	}
}

fn wants_json(headers: &HeaderMap) -> bool {
	headers
		.get(ACCEPT)
		.and_then(|value| value.to_str().ok())
		.map(|value| value.contains("application/json"))
		.unwrap_or(false)
}

/// Sends the inquiry once. The page script asks for JSON and shows the
/// notice in place. A plain form post is answered with 303 See Other, so
/// reloading the page it lands on never sends the inquiry again.
pub async fn contact(state: State<AppState>, headers: HeaderMap, form: Form<InquiryForm>) -> Response {
	let form = form.0;
	let car_id = form.car_id;
	let outcome = submit_inquiry(&state.client, form).await;
	info!("contact form for car {:?}: {:?}", car_id, outcome);

	if wants_json(&headers) {
		let status = match outcome {
			InquiryOutcome::Received => StatusCode::OK,
			InquiryOutcome::Failed => StatusCode::BAD_GATEWAY,
		};
		let body = json!({ "status": outcome.as_param(), "notice": outcome.notice() });
		return (status, Json(body)).into_response();
	}

	let location = match car_id {
		Some(id) => format!("/details.html?id={}&inquiry={}", id, outcome.as_param()),
		None => format!("/?inquiry={}", outcome.as_param()),
	};
	Redirect::to(&location).into_response()
}

pub async fn not_found() -> Response {
	(StatusCode::NOT_FOUND, Json(json!({ "error": "route not found" }))).into_response()
}
