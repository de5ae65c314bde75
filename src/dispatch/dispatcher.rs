use std::time::{Duration, Instant};

use quicksearch_matching::Query;
use tracing::{debug, warn};

use super::{QueryReply, QueryRequest, RequestTag, Transport};
use crate::endpoint::Endpoint;
use crate::suggest::{ResourceFormatter, SuggestionFormatter, SuggestionList};

/// Input must stay unchanged this long before it is sent.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Rows requested per query unless configured otherwise.
pub const DEFAULT_MAX_RESULTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchSettings {
	pub quiet_period: Duration,
	pub max_results: usize,
	/// Offer the typed text itself when no suggestion matches it exactly.
	pub enable_user_entry: bool,
}

impl Default for DispatchSettings {
	fn default() -> Self {
		Self {
			quiet_period: DEFAULT_QUIET_PERIOD,
			max_results: DEFAULT_MAX_RESULTS,
			enable_user_entry: false,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchState {
	Idle,
	/// Waiting for the input to settle.
	Scheduled { text: String, deadline: Instant },
	/// A request is in flight and nothing newer is scheduled.
	AwaitingResponse { tag: RequestTag },
}

/// What happened to a reply handed to [`Dispatcher::on_response`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
	Applied,
	/// The reply answered an older request and was dropped.
	Stale,
}

/// Debounces keystrokes of one search box and publishes the suggestions for
/// the latest settled input.
///
/// The caller owns the clock: keystrokes and polls carry the current
/// [`Instant`], and [`Dispatcher::next_deadline`] says when to poll next.
#[derive(Debug)]
pub struct Dispatcher<T, F = ResourceFormatter> {
	transport: T,
	formatter: F,
	endpoint: Endpoint,
	settings: DispatchSettings,
	latest: RequestTag,
	/// Tag whose reply is still wanted. Cleared once it is applied or when the
	/// input is abandoned.
	awaiting: Option<RequestTag>,
	latest_query: Query,
	state: DispatchState,
	suggestions: SuggestionList,
}

impl<T: Transport> Dispatcher<T> {
	/// Dispatcher for resource lookups using the default settings.
	pub fn new(transport: T) -> Self {
		Self::with_formatter(transport, ResourceFormatter::default())
	}
}

impl<T, F> Dispatcher<T, F>
where
	T: Transport,
	F: SuggestionFormatter,
{
	pub fn with_formatter(transport: T, formatter: F) -> Self {
		Self {
			transport,
			formatter,
			endpoint: Endpoint::default(),
			settings: DispatchSettings::default(),
			latest: RequestTag::default(),
			awaiting: None,
			latest_query: Query::default(),
			state: DispatchState::Idle,
			suggestions: SuggestionList::empty(),
		}
	}

	pub fn with_settings(mut self, settings: DispatchSettings) -> Self {
		self.settings = settings;
		self
	}

	pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
		self.endpoint = endpoint;
		self
	}

	/// Restart the quiet period for `text`.
	///
	/// Blank text cancels any pending dispatch and closes the menu instead.
	pub fn on_input_changed(&mut self, text: &str, now: Instant) {
		if text.trim().is_empty() {
			self.reset();
			return;
		}

		self.state = DispatchState::Scheduled {
			text: text.to_string(),
			deadline: now + self.settings.quiet_period,
		};
		self.suggestions = SuggestionList::searching();
	}

	/// Dispatch the scheduled text once its quiet period has elapsed.
	pub fn poll(&mut self, now: Instant) -> Option<RequestTag> {
		let DispatchState::Scheduled { text, deadline } = &self.state else {
			return None;
		};
		if now < *deadline {
			return None;
		}
		let text = text.clone();
		Some(self.dispatch(&text))
	}

	pub fn next_deadline(&self) -> Option<Instant> {
		match &self.state {
			DispatchState::Scheduled { deadline, .. } => Some(*deadline),
			_ => None,
		}
	}

	/// Send `text` right away under a fresh tag.
	///
	/// A transport that refuses the request is reported as an error row; there
	/// is no retry.
	pub fn dispatch(&mut self, text: &str) -> RequestTag {
		self.latest = self.latest.next();
		let tag = self.latest;
		self.awaiting = Some(tag);
		self.latest_query = Query::parse(text);
		self.state = DispatchState::AwaitingResponse { tag };

		let limit = self.settings.max_results;
		let request = QueryRequest {
			tag,
			text: text.to_string(),
			urls: self.endpoint.urls(text, tag, limit),
			limit,
		};
		debug!(%tag, urls = ?request.urls, "dispatching query");

		if let Err(error) = self.transport.send(request) {
			warn!(%tag, %error, "transport refused query");
			self.suggestions = SuggestionList::failed(&error);
			self.awaiting = None;
			self.state = DispatchState::Idle;
		}
		tag
	}

	/// Apply `reply` if it answers the latest request, otherwise drop it.
	///
	/// Any reply ends an `AwaitingResponse` state. Replies to a request whose
	/// input was since cleared, or that were already applied once, are stale.
	pub fn on_response(&mut self, reply: QueryReply) -> Delivery {
		if matches!(self.state, DispatchState::AwaitingResponse { .. }) {
			self.state = DispatchState::Idle;
		}

		if self.awaiting != Some(reply.tag) {
			debug!(tag = %reply.tag, latest = %self.latest, "dropping stale reply");
			return Delivery::Stale;
		}
		self.awaiting = None;

		self.suggestions = match reply.outcome {
			Ok(response) => {
				debug!(tag = %reply.tag, rows = response.rows.len(), "applying reply");
				SuggestionList::from_response(
					&response,
					&self.latest_query,
					&self.formatter,
					self.settings.enable_user_entry,
				)
			}
			Err(error) => {
				warn!(tag = %reply.tag, %error, "query failed");
				SuggestionList::failed(&error)
			}
		};
		Delivery::Applied
	}

	/// Forget the pending input and close the menu. Tags keep counting, so
	/// replies to earlier requests stay stale.
	pub fn reset(&mut self) {
		self.state = DispatchState::Idle;
		self.awaiting = None;
		self.suggestions = SuggestionList::empty();
	}

	pub fn state(&self) -> &DispatchState {
		&self.state
	}

	pub fn suggestions(&self) -> &SuggestionList {
		&self.suggestions
	}

	/// Tag of the most recent dispatch; zero before the first one.
	pub fn latest_tag(&self) -> RequestTag {
		self.latest
	}

	/// Tag of the request whose reply would still be applied.
	pub fn awaiting(&self) -> Option<RequestTag> {
		self.awaiting
	}

	/// Nothing is scheduled and no wanted reply is outstanding.
	pub fn is_settled(&self) -> bool {
		self.state == DispatchState::Idle && self.awaiting.is_none()
	}

	pub fn settings(&self) -> &DispatchSettings {
		&self.settings
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	pub fn transport_mut(&mut self) -> &mut T {
		&mut self.transport
	}
}
