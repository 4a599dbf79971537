use serde::Deserialize;

/// The subset of the PhoneID response body that the classifier consumes.
/// Everything else the service returns is parsed permissively and ignored.
///
/// Endpoint: GET https://rest-ww.telesign.com/v1/phoneid/{phone_number}
#[derive(Debug, Clone, Deserialize)]
pub struct PhoneIdResponse {
	#[serde(default)]
	pub reference_id: Option<String>,
	#[serde(default)]
	pub status: Option<TransactionStatus>,
	#[serde(default)]
	pub numbering: Option<Numbering>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionStatus {
	#[serde(default)]
	pub code: Option<i64>,
	#[serde(default)]
	pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Numbering {
	#[serde(default)]
	pub phone_type: Option<String>,
}

impl PhoneIdResponse {
	/// The raw phone-type label, if the response carried one.
	pub fn phone_type(&self) -> Option<&str> {
		self.numbering.as_ref()?.phone_type.as_deref()
	}
}
