//! Turning raw rows into the suggestions shown under a search box.
//!
//! A [`SuggestionFormatter`] decides how a single row is labelled and which of
//! its fields explain the match. [`SuggestionList`] applies a formatter to a
//! whole response and adds the disabled placeholder rows the menu needs when
//! there is nothing (or something unexpected) to show.

mod list;
mod resource;
mod vocabulary;

pub use list::{
	LOAD_FAILURE_TEXT, NO_RESULTS_TEXT, NONE_OF_ABOVE_TEXT, PARTIAL_FAILURE_TEXT, PlaceholderKind,
	SEARCHING_TEXT, Suggestion, SuggestionList, USER_ENTRY_NO_RESULTS_TEXT,
};
pub use resource::{DEFAULT_LABEL_PROPERTY, ResourceFormatter};
pub use vocabulary::VocabularyFormatter;

use quicksearch_matching::Query;
use serde::Serialize;

use crate::record::Record;

/// Strategy deciding how a row is presented for the active query.
pub trait SuggestionFormatter {
	fn annotate(&self, record: &Record, query: &Query) -> AnnotatedRow;
}

impl<F: SuggestionFormatter + ?Sized> SuggestionFormatter for Box<F> {
	fn annotate(&self, record: &Record, query: &Query) -> AnnotatedRow {
		(**self).annotate(record, query)
	}
}

/// A row together with everything the menu needs to render it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedRow {
	#[serde(rename = "@path")]
	pub path: Option<String>,
	pub label: String,
	/// Whether every query word was found somewhere on the row.
	pub matched: bool,
	/// Whether the label (or a synonym) equals the whole query.
	pub is_perfect_match: bool,
	/// Fields explaining the match when the label alone does not.
	pub matched_fields: Vec<MatchedField>,
	pub record: Record,
}

/// A field shown below the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MatchedField {
	/// Snippet of a longer text property.
	Excerpt { property: String, text: String },
	/// A whole value, such as one element of a list property.
	Value { property: String, text: String },
}

impl MatchedField {
	pub fn property(&self) -> &str {
		match self {
			Self::Excerpt { property, .. } | Self::Value { property, .. } => property,
		}
	}

	pub fn text(&self) -> &str {
		match self {
			Self::Excerpt { text, .. } | Self::Value { text, .. } => text,
		}
	}
}

/// Whether every word of `query` occurs in at least one of `texts`.
pub(crate) fn covers_query<'a>(query: &Query, texts: impl IntoIterator<Item = &'a str>) -> bool {
	let wanted = query.distinct_words();
	let mut found: Vec<&str> = Vec::with_capacity(wanted.len());
	for text in texts {
		for word in query.matched_words(text) {
			if !found.contains(&word) {
				found.push(word);
			}
		}
		if found.len() == wanted.len() {
			return true;
		}
	}
	found.len() == wanted.len()
}

#[cfg(test)]
mod tests;
