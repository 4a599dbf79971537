use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use secrecy::{ExposeSecret, SecretString};

/// Credentials for the TeleSign REST API.
///
/// The API key is held as a [`SecretString`] so it stays out of Debug output
/// and log messages.
#[derive(Debug, Clone)]
pub struct ApiCredentials {
	customer_id: String,
	api_key: SecretString,
}

impl ApiCredentials {
	#[must_use]
	pub fn new(customer_id: String, api_key: SecretString) -> Self {
		Self {
			customer_id,
			api_key,
		}
	}

	pub fn customer_id(&self) -> &str {
		&self.customer_id
	}

	/// Builds the value for the HTTP basic `Authorization` header,
	/// `Basic base64(customerId:apiKey)`.
	pub(crate) fn authorization_header(&self) -> String {
		format!(
			"Basic {}",
			STANDARD.encode(format!(
				"{}:{}",
				self.customer_id,
				self.api_key.expose_secret()
			))
		)
	}
}
