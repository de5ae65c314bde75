use std::fmt;

use crate::dispatch::TransportError;
use crate::response::QueryResponse;

/// Sequence number attached to every dispatched query.
///
/// Tags only grow; the dispatcher accepts a reply only when its tag equals the
/// most recently issued one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTag(u64);

impl RequestTag {
	pub const fn new(value: u64) -> Self {
		Self(value)
	}

	pub const fn get(self) -> u64 {
		self.0
	}

	pub(crate) fn next(self) -> Self {
		Self(self.0.saturating_add(1))
	}
}

impl fmt::Display for RequestTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// An outbound query handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
	/// Tag captured when the request was dispatched.
	pub tag: RequestTag,
	/// Text the user had typed when the quiet period elapsed.
	pub text: String,
	/// Endpoint URLs, one per backend lookup. Vocabulary searches fan out to
	/// one URL per vocabulary, in the configured order.
	pub urls: Vec<String>,
	/// Maximum number of rows wanted back.
	pub limit: usize,
}

/// A transport's answer to a [`QueryRequest`].
#[derive(Debug)]
pub struct QueryReply {
	/// Tag of the request this reply answers, copied from the request.
	pub tag: RequestTag,
	pub outcome: Result<QueryResponse, TransportError>,
}

impl QueryReply {
	pub fn success(tag: RequestTag, response: QueryResponse) -> Self {
		Self {
			tag,
			outcome: Ok(response),
		}
	}

	pub fn failure(tag: RequestTag, error: TransportError) -> Self {
		Self {
			tag,
			outcome: Err(error),
		}
	}
}
