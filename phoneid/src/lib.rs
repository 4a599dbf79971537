use log::*;

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate anyhow;

pub mod api_responses;
mod credentials;
mod failure_log;
pub mod policy;
pub mod transport;

pub use api_responses::PhoneIdResponse;
pub use credentials::ApiCredentials;
pub use failure_log::{FailureLog, FileFailureLog, DEFAULT_FAILURE_LOG_PATH};
pub use policy::PhoneTypeCategory;
pub use transport::{Transport, TransportError, WebApiTransport};

/// Checks phone numbers against the TeleSign PhoneID API and decides whether
/// they are trustworthy enough to accept.
///
/// Fail-closed: any failure to confirm a number counts as invalid, so callers
/// cannot distinguish "confirmed invalid" from "could not confirm".
#[derive(Debug)]
pub struct PhoneValidator<T>
where
	T: Transport,
{
	transport: T,
}

impl PhoneValidator<WebApiTransport> {
	/// Builds a validator that talks to the live PhoneID service, appending
	/// failure diagnostics to the default log file.
	pub fn new(credentials: ApiCredentials) -> Self {
		Self::with_transport(WebApiTransport::new(credentials))
	}
}

impl<T> PhoneValidator<T>
where
	T: Transport,
{
	#[must_use]
	pub fn with_transport(transport: T) -> Self {
		Self { transport }
	}

	/// Returns `true` only when the service reports a phone type in the
	/// accepted set. Unknown phone types, missing fields, and transport
	/// failures all count as invalid.
	pub fn is_valid_phone_number(&self, phone_number: &str) -> bool {
		match self.classify_phone_number(phone_number) {
			Ok(PhoneTypeCategory::Valid) => true,
			Ok(category) => {
				debug!("phone type categorized as {:?}, rejecting", category);
				false
			}
			Err(err) => {
				debug!("could not classify phone number: {}", err);
				false
			}
		}
	}

	/// The full classification outcome behind [`Self::is_valid_phone_number`].
	pub fn classify_phone_number(
		&self,
		phone_number: &str,
	) -> Result<PhoneTypeCategory, ClassifyError> {
		let response = self.transport.fetch_classification(phone_number)?;
		let phone_type = response
			.phone_type()
			.ok_or(ClassifyError::MissingPhoneType)?;
		Ok(policy::categorize_phone_type(phone_type))
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
	#[error("Transport error: {0}")]
	Transport(#[from] TransportError),
	#[error("API response did not contain numbering.phone_type")]
	MissingPhoneType,
}
