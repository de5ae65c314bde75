//! Debounced dispatch of quick-search queries.
//!
//! Keystrokes restart a quiet-period timer; only once the input settles is a
//! request sent. Every request carries a [`RequestTag`] captured when it was
//! dispatched, and replies are applied only when their tag is the latest one,
//! so a slow answer to an older query can never replace newer results.

mod commands;
mod dispatcher;
mod error;

pub use commands::{QueryReply, QueryRequest, RequestTag};
pub use dispatcher::{
	DEFAULT_MAX_RESULTS, DEFAULT_QUIET_PERIOD, Delivery, DispatchSettings, DispatchState, Dispatcher,
};
pub use error::TransportError;

/// Carries dispatched requests to whatever answers them.
///
/// Sending must not block on the answer; replies are fed back through
/// [`Dispatcher::on_response`].
pub trait Transport {
	fn send(&mut self, request: QueryRequest) -> Result<(), TransportError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
	fn send(&mut self, request: QueryRequest) -> Result<(), TransportError> {
		(**self).send(request)
	}
}
