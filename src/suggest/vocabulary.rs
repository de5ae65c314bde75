use quicksearch_matching::{Query, matching_excerpt, matching_items};

use super::{AnnotatedRow, MatchedField, SuggestionFormatter, covers_query};
use crate::record::Record;

const LABEL_KEYS: [&str; 3] = ["label", "name", "identifier"];
const SYNONYM_KEYS: [&str; 2] = ["synonym", "has_exact_synonym"];
const DEFINITION_KEYS: [&str; 3] = ["def", "description", "definition"];

/// Formatter for vocabulary terms.
///
/// Terms are labelled by their name. When the name does not match, the
/// synonyms that explain the match are shown, falling back to an excerpt of
/// the definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VocabularyFormatter;

impl SuggestionFormatter for VocabularyFormatter {
	fn annotate(&self, record: &Record, query: &Query) -> AnnotatedRow {
		let label = LABEL_KEYS
			.iter()
			.find_map(|key| record.text(key))
			.unwrap_or_default();
		let (synonym_key, synonyms) = first_present(record, &SYNONYM_KEYS)
			.map(|key| (key, record.texts(key)))
			.unwrap_or((SYNONYM_KEYS[0], Vec::new()));
		let (definition_key, definition) = first_present(record, &DEFINITION_KEYS)
			.map(|key| (key, record.texts(key).first().copied().unwrap_or_default()))
			.unwrap_or((DEFINITION_KEYS[0], ""));

		let is_perfect_match =
			query.is_exact(label) || synonyms.iter().any(|synonym| query.is_exact(synonym));

		let mut matched_fields = Vec::new();
		if !query.matches(label) {
			matched_fields.extend(matching_items(query.text(), &synonyms).into_iter().map(
				|synonym| MatchedField::Value {
					property: synonym_key.to_string(),
					text: synonym.to_string(),
				},
			));
			if matched_fields.is_empty() && query.matches(definition) {
				matched_fields.push(MatchedField::Excerpt {
					property: definition_key.to_string(),
					text: matching_excerpt(query.text(), definition),
				});
			}
		}

		let matched = covers_query(
			query,
			std::iter::once(label)
				.chain(synonyms.iter().copied())
				.chain(std::iter::once(definition)),
		);

		AnnotatedRow {
			path: record.path().map(str::to_string),
			label: label.to_string(),
			matched,
			is_perfect_match,
			matched_fields,
			record: record.clone(),
		}
	}
}

fn first_present(record: &Record, keys: &[&'static str]) -> Option<&'static str> {
	keys.iter().copied().find(|key| record.field(key).is_some())
}
