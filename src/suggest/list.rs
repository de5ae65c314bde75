use quicksearch_matching::Query;
use serde::Serialize;

use super::{AnnotatedRow, SuggestionFormatter};
use crate::dispatch::TransportError;
use crate::response::QueryResponse;

pub const SEARCHING_TEXT: &str = "Searching...";
pub const NO_RESULTS_TEXT: &str = "No results";
pub const USER_ENTRY_NO_RESULTS_TEXT: &str = "No results, use:";
pub const NONE_OF_ABOVE_TEXT: &str = "None of the above, use:";
/// Shown when no suggestion could be loaded at all.
pub const LOAD_FAILURE_TEXT: &str = "Answer suggestions cannot be loaded for this question.";
/// Leads the list when some vocabularies answered and others failed.
pub const PARTIAL_FAILURE_TEXT: &str = "Some answer suggestions for this question could not be loaded";

/// Why a disabled row is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaceholderKind {
	Searching,
	NoResults,
	Error,
	/// Heading above the raw text the user may keep as their answer.
	UserEntryHint,
}

/// One row of the suggestion menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Suggestion {
	Match(AnnotatedRow),
	Placeholder { kind: PlaceholderKind, text: String },
	/// The typed text offered as an answer of its own.
	UserEntry { text: String },
}

impl Suggestion {
	pub fn placeholder(kind: PlaceholderKind, text: impl Into<String>) -> Self {
		Self::Placeholder {
			kind,
			text: text.into(),
		}
	}

	/// Disabled rows cannot be selected.
	pub fn is_disabled(&self) -> bool {
		matches!(self, Self::Placeholder { .. })
	}

	pub fn label(&self) -> &str {
		match self {
			Self::Match(row) => &row.label,
			Self::Placeholder { text, .. } | Self::UserEntry { text } => text,
		}
	}

	pub fn as_match(&self) -> Option<&AnnotatedRow> {
		match self {
			Self::Match(row) => Some(row),
			_ => None,
		}
	}

	pub fn is_perfect_match(&self) -> bool {
		self.as_match().is_some_and(|row| row.is_perfect_match)
	}
}

/// Everything currently shown under the search box.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionList {
	suggestions: Vec<Suggestion>,
	/// Matches the backend found but did not return.
	more_results: usize,
}

impl SuggestionList {
	/// Nothing to show; the menu is closed.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Shown while a query is waiting for its quiet period or response.
	pub fn searching() -> Self {
		Self::single(Suggestion::placeholder(
			PlaceholderKind::Searching,
			SEARCHING_TEXT,
		))
	}

	/// A single error row in place of any results.
	pub fn failed(error: &TransportError) -> Self {
		Self::single(Suggestion::placeholder(
			PlaceholderKind::Error,
			error.to_string(),
		))
	}

	/// Annotate every row of `response` for `query`.
	///
	/// Error rows become error placeholders. An empty response becomes a
	/// "No results" row, unless the user may keep their own text, in which case
	/// the typed text is offered whenever no suggestion matches it exactly.
	pub fn from_response<F>(
		response: &QueryResponse,
		query: &Query,
		formatter: &F,
		enable_user_entry: bool,
	) -> Self
	where
		F: SuggestionFormatter + ?Sized,
	{
		let mut suggestions: Vec<Suggestion> = response
			.rows
			.iter()
			.map(|row| {
				if row.is_error() {
					Suggestion::placeholder(
						PlaceholderKind::Error,
						row.message().unwrap_or(LOAD_FAILURE_TEXT),
					)
				} else {
					Suggestion::Match(formatter.annotate(row, query))
				}
			})
			.collect();

		let has_results = suggestions.iter().any(|suggestion| suggestion.as_match().is_some());
		let offer_user_entry =
			enable_user_entry && !suggestions.iter().any(Suggestion::is_perfect_match);

		if offer_user_entry {
			let hint = if has_results {
				NONE_OF_ABOVE_TEXT
			} else {
				USER_ENTRY_NO_RESULTS_TEXT
			};
			suggestions.push(Suggestion::placeholder(PlaceholderKind::UserEntryHint, hint));
			suggestions.push(Suggestion::UserEntry {
				text: query.text().to_string(),
			});
		} else if suggestions.is_empty() {
			suggestions.push(Suggestion::placeholder(
				PlaceholderKind::NoResults,
				NO_RESULTS_TEXT,
			));
		}

		Self {
			suggestions,
			more_results: response.more_results(),
		}
	}

	fn single(suggestion: Suggestion) -> Self {
		Self {
			suggestions: vec![suggestion],
			more_results: 0,
		}
	}

	pub fn suggestions(&self) -> &[Suggestion] {
		&self.suggestions
	}

	pub fn iter(&self) -> impl Iterator<Item = &Suggestion> {
		self.suggestions.iter()
	}

	/// Annotated rows only, without placeholders or user entries.
	pub fn matches(&self) -> impl Iterator<Item = &AnnotatedRow> {
		self.suggestions.iter().filter_map(Suggestion::as_match)
	}

	pub fn len(&self) -> usize {
		self.suggestions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.suggestions.is_empty()
	}

	pub fn more_results(&self) -> usize {
		self.more_results
	}

	/// The single placeholder kind shown, if the list is nothing but that.
	pub fn placeholder_kind(&self) -> Option<PlaceholderKind> {
		match self.suggestions.as_slice() {
			[Suggestion::Placeholder { kind, .. }] => Some(*kind),
			_ => None,
		}
	}
}
