#![allow(dead_code)]

use std::{
	collections::HashMap,
	sync::{Arc, Mutex},
	time::Duration,
};

use axum::{
	body::Body,
	extract::{Path, Query, State},
	http::{Method, Request, StatusCode},
	response::{IntoResponse, Response},
	routing::{get, post},
	Json, Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use showroom::{build_app, cars::CarsClient, config::ApiConfig, AppState};

/// Make value that makes the mock answer late.
pub const SLOW_MAKE: &str = "Slow";

#[derive(Clone)]
pub struct Backend {
	pub cars: Arc<Vec<Value>>,
	pub cars_status: StatusCode,
	pub raw_body: Option<&'static str>,
	pub inquiry_status: StatusCode,
	pub inquiries: Arc<Mutex<Vec<Value>>>,
	pub queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl Backend {
	pub fn with_cars(cars: Vec<Value>) -> Self {
		Self {
			cars: Arc::new(cars),
			cars_status: StatusCode::OK,
			raw_body: None,
			inquiry_status: StatusCode::CREATED,
			inquiries: Arc::default(),
			queries: Arc::default(),
		}
	}

	pub fn inquiries(&self) -> Vec<Value> {
		self.inquiries.lock().unwrap().clone()
	}

	pub fn queries(&self) -> Vec<HashMap<String, String>> {
		self.queries.lock().unwrap().clone()
	}
}

pub fn car(id: i64, make: &str, model: &str, featured: bool) -> Value {
	json!({
		"id": id,
		"make": make,
		"model": model,
		"year": 2023,
		"price": 100000,
		"mileage": 1500,
		"transmission": "Automatic",
		"fuel_type": "Petrol",
		"description": format!("{} {} in showroom condition.", make, model),
		"image_url": format!("https://img.example.com/{}.jpg", id),
		"featured": if featured { 1 } else { 0 },
	})
}

pub fn civic() -> Value {
	json!({
		"id": 1,
		"make": "Honda",
		"model": "Civic",
		"year": 2020,
		"price": 18000,
		"mileage": 30000,
		"fuel_type": "Gas",
		"transmission": "Auto",
		"image_url": "x.jpg",
	})
}

async fn list_cars(State(backend): State<Backend>, Query(query): Query<HashMap<String, String>>) -> Response {
	backend.queries.lock().unwrap().push(query.clone());

	if backend.cars_status != StatusCode::OK {
		return (backend.cars_status, Json(json!({ "error": "database is down" }))).into_response();
	}
	if let Some(raw) = backend.raw_body {
		return raw.into_response();
	}

	let make = query.get("make").map(|m| m.to_lowercase());
	if make.as_deref() == Some(SLOW_MAKE.to_lowercase().as_str()) {
		tokio::time::sleep(Duration::from_millis(300)).await;
	}
	let featured_only = query.get("featured").map(|f| f == "true").unwrap_or(false);

	// Same shape as the backend: featured = ?, make LIKE %?%
	let cars: Vec<Value> = backend
		.cars
		.iter()
		.filter(|car| !featured_only || car["featured"] == json!(1) || car["featured"] == json!(true))
		.filter(|car| match &make {
			Some(make) => car["make"].as_str().unwrap_or("").to_lowercase().contains(make.as_str()),
			None => true,
		})
		.cloned()
		.collect();
	Json(cars).into_response()
}

async fn get_car(State(backend): State<Backend>, Path(id): Path<i64>) -> Response {
	match backend.cars.iter().find(|car| car["id"] == json!(id)) {
		Some(car) => Json(car.clone()).into_response(),
		None => (StatusCode::NOT_FOUND, Json(json!({ "error": "Car not found" }))).into_response(),
	}
}

async fn post_inquiry(State(backend): State<Backend>, Json(body): Json<Value>) -> Response {
	backend.inquiries.lock().unwrap().push(body);
	(backend.inquiry_status, Json(json!({ "success": true, "message": "Inquiry received" }))).into_response()
}

/// Starts the mock listings backend and returns its base URL.
pub async fn spawn_backend(backend: Backend) -> String {
	let app = Router::new()
		.route("/api/cars", get(list_cars))
		.route("/api/cars/:id", get(get_car))
		.route("/api/inquiry", post(post_inquiry))
		.with_state(backend);
	let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
	let addr = listener.local_addr().unwrap();

	tokio::spawn(async move {
		axum::serve(listener, app).await.unwrap();
	});

	format!("http://{}", addr)
}

pub fn client(base_url: &str) -> CarsClient {
	CarsClient::new(ApiConfig::new(base_url)).unwrap()
}

pub fn app(base_url: &str) -> Router {
	build_app(AppState::new(client(base_url)))
}

pub fn get_request(uri: &str) -> Request<Body> {
	Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap()
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
	Request::builder()
		.method(Method::POST)
		.uri(uri)
		.header("content-type", "application/x-www-form-urlencoded")
		.body(Body::from(body.to_string()))
		.unwrap()
}

pub async fn body_text(response: Response) -> String {
	let bytes = response.into_body().collect().await.unwrap().to_bytes();
	String::from_utf8(bytes.to_vec()).unwrap()
}
