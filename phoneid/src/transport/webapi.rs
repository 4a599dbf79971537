use std::sync::Arc;
use std::time::Duration;

use log::*;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{StatusCode, Url};

use super::{Transport, TransportError};
use crate::api_responses::PhoneIdResponse;
use crate::credentials::ApiCredentials;
use crate::failure_log::{FailureLog, FileFailureLog};

lazy_static! {
	static ref PHONEID_API_BASE: Url = "https://rest-ww.telesign.com".parse::<Url>().unwrap();
}

// Keeps a wedged service from hanging the caller indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Talks to the live PhoneID REST API over HTTPS.
///
/// Every failure path appends exactly one message to the failure log before
/// surfacing a [`TransportError`]; successful requests append nothing.
pub struct WebApiTransport {
	client: reqwest::blocking::Client,
	base_url: Url,
	credentials: ApiCredentials,
	failure_log: Arc<dyn FailureLog>,
}

impl WebApiTransport {
	#[must_use]
	pub fn new(credentials: ApiCredentials) -> Self {
		Self::with_failure_log(credentials, Arc::new(FileFailureLog::default()))
	}

	#[must_use]
	pub fn with_failure_log(
		credentials: ApiCredentials,
		failure_log: Arc<dyn FailureLog>,
	) -> Self {
		WebApiTransport {
			client: reqwest::blocking::Client::builder()
				.timeout(REQUEST_TIMEOUT)
				.build()
				.expect("could not build HTTP client"),
			base_url: PHONEID_API_BASE.clone(),
			credentials,
			failure_log,
		}
	}

	/// Overrides the service base address. Used to point the transport at a
	/// local stub server in tests.
	#[must_use]
	pub fn with_base_url(mut self, base_url: Url) -> Self {
		self.base_url = base_url;
		self
	}

	fn build_phoneid_url(&self, phone_number: &str) -> Result<Url, TransportError> {
		let mut url = self.base_url.clone();
		{
			let mut segments = url
				.path_segments_mut()
				.map_err(|_| anyhow!("base URL cannot be a base: {}", self.base_url))?;
			segments.extend(&["v1", "phoneid"]).push(phone_number);
		}
		Ok(url)
	}
}

impl std::fmt::Debug for WebApiTransport {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("WebApiTransport")
			.field("base_url", &self.base_url)
			.field("credentials", &self.credentials)
			.finish_non_exhaustive()
	}
}

impl Transport for WebApiTransport {
	fn fetch_classification(
		&self,
		phone_number: &str,
	) -> Result<PhoneIdResponse, TransportError> {
		let url = match self.build_phoneid_url(phone_number) {
			Ok(url) => url,
			Err(err) => {
				self.failure_log.append(&err.to_string());
				return Err(err);
			}
		};
		debug!("HTTP Request: GET {}", url);

		let resp = match self
			.client
			.get(url)
			.header(AUTHORIZATION, self.credentials.authorization_header())
			.header(CONTENT_TYPE, "application/x-www-form-urlencoded")
			.send()
		{
			Ok(resp) => resp,
			Err(err) => {
				let err = TransportError::from(err);
				self.failure_log.append(&err.to_string());
				return Err(err);
			}
		};

		let status = resp.status();
		debug!("Response HTTP status: {}", status);
		if status != StatusCode::OK {
			let diagnostic = resp.text().unwrap_or_default();
			trace!("Response body: {}", diagnostic);
			let err = TransportError::HttpStatus(status);
			self.failure_log
				.append(&format!("{}. {}", err, diagnostic.trim()));
			return Err(err);
		}

		let text = match resp.text() {
			Ok(text) => text,
			Err(err) => {
				let err = TransportError::from(err);
				self.failure_log.append(&err.to_string());
				return Err(err);
			}
		};
		trace!("Response body: {}", text);

		let mut deserializer = serde_json::Deserializer::from_str(&text);
		match serde_path_to_error::deserialize(&mut deserializer) {
			Ok(parsed) => Ok(parsed),
			Err(err) => {
				let err = TransportError::DecodeError(err.to_string());
				self.failure_log.append(&err.to_string());
				Err(err)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::io::{Read, Write};
	use std::net::TcpListener;
	use std::thread;

	use secrecy::SecretString;

	use super::*;
	use crate::failure_log::testing::MemoryFailureLog;

	fn test_credentials() -> ApiCredentials {
		ApiCredentials::new(
			"12345678-9ABC-DEF0-1234-56789ABCDEF0".to_string(),
			SecretString::new("c2VjcmV0IGtleQ==".to_string()),
		)
	}

	fn http_response(status_line: &str, body: &str) -> String {
		format!(
			"HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
			status_line,
			body.len(),
			body
		)
	}

	/// Serves exactly one canned response on a loopback port, and hands the
	/// raw request back through the join handle.
	fn serve_one_response(response: String) -> (Url, thread::JoinHandle<String>) {
		let listener = TcpListener::bind("127.0.0.1:0").unwrap();
		let addr = listener.local_addr().unwrap();
		let handle = thread::spawn(move || {
			let (mut stream, _) = listener.accept().unwrap();
			let mut request = Vec::new();
			let mut buf = [0u8; 1024];
			while !request.windows(4).any(|window| window == b"\r\n\r\n") {
				let n = stream.read(&mut buf).unwrap();
				if n == 0 {
					break;
				}
				request.extend_from_slice(&buf[..n]);
			}
			stream.write_all(response.as_bytes()).unwrap();
			String::from_utf8_lossy(&request).into_owned()
		});
		(format!("http://{}", addr).parse().unwrap(), handle)
	}

	#[test]
	fn test_build_phoneid_url_escapes_path_segment() {
		let transport =
			WebApiTransport::with_failure_log(test_credentials(), MemoryFailureLog::new());
		let url = transport.build_phoneid_url("+1 555/0100").unwrap();
		assert_eq!(
			url.as_str(),
			"https://rest-ww.telesign.com/v1/phoneid/+1%20555%2F0100"
		);
	}

	#[test]
	fn test_fetch_classification_success_logs_nothing() {
		let body = include_str!("../fixtures/api-responses/phoneid-mobile.json");
		let (base, handle) = serve_one_response(http_response("200 OK", body));
		let sink = MemoryFailureLog::new();
		let transport = WebApiTransport::with_failure_log(test_credentials(), sink.clone())
			.with_base_url(base);

		let resp = transport.fetch_classification("15555550100").unwrap();
		assert_eq!(resp.phone_type(), Some("MOBILE"));
		assert!(sink.messages().is_empty());

		let request = handle.join().unwrap().to_lowercase();
		assert!(request.starts_with("get /v1/phoneid/15555550100 http/1.1\r\n"));
		assert!(request.contains("authorization: basic "));
		assert!(request.contains("content-type: application/x-www-form-urlencoded"));
	}

	#[test]
	fn test_fetch_classification_non_200_logs_once() {
		let (base, handle) = serve_one_response(http_response(
			"500 Internal Server Error",
			r#"{"status": {"code": 10032, "description": "System Unavailable"}}"#,
		));
		let sink = MemoryFailureLog::new();
		let transport = WebApiTransport::with_failure_log(test_credentials(), sink.clone())
			.with_base_url(base);

		let result = transport.fetch_classification("15555550100");
		assert!(
			matches!(result, Err(TransportError::HttpStatus(code)) if code.as_u16() == 500)
		);
		let messages = sink.messages();
		assert_eq!(messages.len(), 1);
		assert!(messages[0].contains("HTTP code: 500"));
		assert!(messages[0].contains("System Unavailable"));
		handle.join().unwrap();
	}

	#[test]
	fn test_fetch_classification_malformed_body_logs_once() {
		let (base, handle) =
			serve_one_response(http_response("200 OK", "certainly not json"));
		let sink = MemoryFailureLog::new();
		let transport = WebApiTransport::with_failure_log(test_credentials(), sink.clone())
			.with_base_url(base);

		let result = transport.fetch_classification("15555550100");
		assert!(matches!(result, Err(TransportError::DecodeError(_))));
		let messages = sink.messages();
		assert_eq!(messages.len(), 1);
		assert!(messages[0].contains("JSON decoding failed"));
		handle.join().unwrap();
	}
}
