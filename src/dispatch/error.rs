use thiserror::Error;

/// Failures reported by a transport instead of a response payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
	/// The endpoint answered with a non-success HTTP status.
	#[error("Error: {status_text} ({status})")]
	Http { status: u16, status_text: String },

	/// The request never produced a response.
	#[error("Error: {0}")]
	Network(String),

	/// The worker answering requests has shut down.
	#[error("Error: the suggestion worker is no longer running")]
	Disconnected,
}

impl TransportError {
	pub fn http(status: u16, status_text: impl Into<String>) -> Self {
		Self::Http {
			status,
			status_text: status_text.into(),
		}
	}
}
