use serde::{Deserialize, Deserializer, Serialize};

use crate::render::format::{group_thousands, price};

/// A listing as the backend returns it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Vehicle {
	pub id: i64,
	pub make: String,
	pub model: String,
	pub year: i32,
	pub price: f64,
	pub mileage: f64,
	pub fuel_type: String,
	pub transmission: String,
	pub image_url: String,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default, deserialize_with = "lenient_flag")]
	pub featured: bool,
}

impl Vehicle {
	pub fn title(&self) -> String {
		format!("{} {}", self.make, self.model)
	}

	pub fn details_href(&self) -> String {
		format!("details.html?id={}", self.id)
	}

	pub fn price_label(&self) -> String {
		price(self.price)
	}

	pub fn mileage_label(&self) -> String {
		format!("{} mi", group_thousands(self.mileage))
	}
}

// SQLite hands booleans back as 0/1, Postgres as true/false.
fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Flag {
		Bool(bool),
		Int(i64),
	}

	Ok(match Option::<Flag>::deserialize(deserializer)? {
		Some(Flag::Bool(b)) => b,
		Some(Flag::Int(n)) => n != 0,
		None => false,
	})
}
