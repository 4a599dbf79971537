pub mod webapi;

pub use webapi::WebApiTransport;

use crate::api_responses::PhoneIdResponse;

/// Issues the outbound request/response cycle against the phone intelligence
/// service. One synchronous request per call, no retries.
pub trait Transport {
	fn fetch_classification(&self, phone_number: &str)
		-> Result<PhoneIdResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
	#[error("API request failed with HTTP code: {0}")]
	HttpStatus(reqwest::StatusCode),
	#[error("JSON decoding failed: {0}")]
	DecodeError(String),
	#[error("API request failed: {0}")]
	NetworkFailure(#[from] reqwest::Error),
	#[error(transparent)]
	Unknown(#[from] anyhow::Error),
}
