//! Debounced quick search for autocompleting search boxes.
//!
//! A [`Dispatcher`] turns keystrokes into at most one request per settled
//! input and applies only the reply to the newest request. Replies are
//! annotated by a [`SuggestionFormatter`] into the rows of a
//! [`SuggestionList`]: a label, the fields that explain a multi-word match and
//! whether the row matches the query exactly. The word matching itself lives
//! in the `quicksearch-matching` crate and is re-exported here.
//!
//! Requests travel through a [`Transport`]. [`worker::spawn`] runs a
//! [`SuggestionSource`] on a background thread and hands back a transport
//! for it, which is how the command line driver answers queries from rows
//! loaded with [`StaticSource`].

pub mod app_dirs;
pub mod dispatch;
pub mod endpoint;
pub mod logging;
pub mod record;
pub mod response;
pub mod source;
pub mod suggest;
pub mod worker;

pub use dispatch::{
	Delivery, DispatchSettings, DispatchState, Dispatcher, QueryReply, QueryRequest, RequestTag,
	Transport, TransportError,
};
pub use endpoint::Endpoint;
pub use quicksearch_matching::{
	Query, matches, matching_excerpt, matching_items, matching_subset, parse_query,
};
pub use record::Record;
pub use response::QueryResponse;
pub use source::{SourceError, StaticSource, SuggestionSource, VocabularySource};
pub use suggest::{
	AnnotatedRow, MatchedField, ResourceFormatter, Suggestion, SuggestionFormatter, SuggestionList,
	VocabularyFormatter,
};
pub use worker::ChannelTransport;
