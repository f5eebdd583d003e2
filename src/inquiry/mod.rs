use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::cars::CarsClient;

pub const RECEIVED: &str = "Your message has been received! Our concierge team will contact you soon.";
pub const FAILED: &str = "Submission failed. Please try again later or email us directly.";

/// Raw contact form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InquiryForm {
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub email: String,
	#[serde(default)]
	pub subject: String,
	#[serde(default)]
	pub message: String,
	#[serde(default)]
	pub phone: Option<String>,
	#[serde(default)]
	pub car_id: Option<i64>,
}

/// Body of `POST /api/inquiry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inquiry {
	pub name: String,
	pub email: String,
	pub message: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub car_id: Option<i64>,
}

impl From<InquiryForm> for Inquiry {
	fn from(form: InquiryForm) -> Self {
		Inquiry {
			message: format!("[Subject: {}] {}", form.subject, form.message),
			name: form.name,
			email: form.email,
			phone: form.phone.filter(|p| !p.trim().is_empty()),
			car_id: form.car_id,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryOutcome {
	Received,
	Failed,
}

impl InquiryOutcome {
	pub fn notice(self) -> &'static str {
		match self {
			InquiryOutcome::Received => RECEIVED,
			InquiryOutcome::Failed => FAILED,
		}
	}

	/// Value of the `inquiry` query parameter on the page redirected to
	/// after a submission.
	pub fn as_param(self) -> &'static str {
		match self {
			InquiryOutcome::Received => "received",
			InquiryOutcome::Failed => "failed",
		}
	}

	/// Unknown values show no notice.
	pub fn from_param(raw: &str) -> Option<Self> {
		match raw {
			"received" => Some(InquiryOutcome::Received),
			"failed" => Some(InquiryOutcome::Failed),
			_ => None,
		}
	}
}

/// Sends the form once. Never retries.
pub async fn submit_inquiry(client: &CarsClient, form: InquiryForm) -> InquiryOutcome {
	let inquiry = Inquiry::from(form);
	match client.post_inquiry(&inquiry).await {
		Ok(()) => {
			info!("inquiry from {} accepted", inquiry.email);
			InquiryOutcome::Received
		}
		Err(e) => {
			warn!("Inquiry error: {}", e);
			InquiryOutcome::Failed
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn form() -> InquiryForm {
		InquiryForm {
			name: "Ama".into(),
			email: "ama@example.com".into(),
			subject: "Test drive".into(),
			message: "Is the 911 available on Saturday?".into(),
			..Default::default()
		}
	}

	#[test]
	fn outcome_param_is_lenient() {
		for outcome in [InquiryOutcome::Received, InquiryOutcome::Failed] {
			assert_eq!(InquiryOutcome::from_param(outcome.as_param()), Some(outcome));
		}
		assert_eq!(InquiryOutcome::from_param("RECEIVED"), None);
		assert_eq!(InquiryOutcome::from_param(""), None);
	}

	#[test]
	fn subject_is_folded_into_message() {
		let inquiry = Inquiry::from(form());
		assert_eq!(inquiry.message, "[Subject: Test drive] Is the 911 available on Saturday?");
	}

	#[test]
	fn global_form_sends_three_fields() {
		let body = serde_json::to_value(Inquiry::from(form())).unwrap();
		assert_eq!(
			body,
			serde_json::json!({
				"name": "Ama",
				"email": "ama@example.com",
				"message": "[Subject: Test drive] Is the 911 available on Saturday?",
			})
		);
	}

	#[test]
	fn details_form_carries_car_and_phone() {
		let mut f = form();
		f.car_id = Some(4);
		f.phone = Some("+233 20 000 0000".into());
		let body = serde_json::to_value(Inquiry::from(f)).unwrap();
		assert_eq!(body["car_id"], 4);
		assert_eq!(body["phone"], "+233 20 000 0000");

		let mut f = form();
		f.phone = Some("  ".into());
		let body = serde_json::to_value(Inquiry::from(f)).unwrap();
		assert!(body.get("phone").is_none());
	}
}
