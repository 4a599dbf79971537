use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::*;

/// Where failure diagnostics go when no other sink is configured.
pub const DEFAULT_FAILURE_LOG_PATH: &str = "/var/log/fraud_detection.log";

/// An append-only sink for transport failure messages.
///
/// Any implementation that can append a line satisfies the contract. The
/// file-backed implementation is the default; tests swap in an in-memory one.
pub trait FailureLog: Send + Sync {
	fn append(&self, message: &str);
}

/// Appends one line per failure to a log file.
#[derive(Debug)]
pub struct FileFailureLog {
	path: PathBuf,
}

impl FileFailureLog {
	#[must_use]
	pub fn new(path: impl AsRef<Path>) -> Self {
		Self {
			path: path.as_ref().to_path_buf(),
		}
	}
}

impl Default for FileFailureLog {
	fn default() -> Self {
		Self::new(DEFAULT_FAILURE_LOG_PATH)
	}
}

impl FailureLog for FileFailureLog {
	fn append(&self, message: &str) {
		// Best effort; an unwritable log file must not break classification.
		let result = OpenOptions::new()
			.create(true)
			.append(true)
			.open(&self.path)
			.and_then(|mut file| writeln!(file, "{}", message));
		if let Err(err) = result {
			warn!(
				"failed to append to failure log {}: {}",
				self.path.display(),
				err
			);
		}
	}
}
