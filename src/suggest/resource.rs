use quicksearch_matching::{Query, matching_excerpt, matching_subset};

use super::{AnnotatedRow, MatchedField, SuggestionFormatter, covers_query};
use crate::record::{FieldValue, Record};

/// Property used as the label when none is configured.
pub const DEFAULT_LABEL_PROPERTY: &str = "@name";

/// Default formatter for resource questions.
///
/// The label comes from a single property. When the label does not match the
/// query by itself, the configured searchable properties are searched and the
/// smallest set of values covering the query is shown: text properties as
/// excerpts, list properties element by element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFormatter {
	label_property: String,
	properties_to_search: Vec<String>,
}

struct SearchableItem<'a> {
	property: &'a str,
	text: &'a str,
	element: bool,
}

impl Default for ResourceFormatter {
	fn default() -> Self {
		Self::new(DEFAULT_LABEL_PROPERTY, Vec::<String>::new())
	}
}

impl ResourceFormatter {
	pub fn new<I, S>(label_property: impl Into<String>, properties_to_search: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			label_property: label_property.into(),
			properties_to_search: properties_to_search.into_iter().map(Into::into).collect(),
		}
	}

	/// Build a formatter from a comma separated property list such as
	/// `"notes, diagnosis"`. Blank entries are ignored.
	pub fn from_property_list(label_property: Option<&str>, properties: &str) -> Self {
		let label_property = label_property
			.map(str::trim)
			.filter(|label| !label.is_empty())
			.unwrap_or(DEFAULT_LABEL_PROPERTY);
		let properties = properties
			.split(',')
			.map(str::trim)
			.filter(|property| !property.is_empty());
		Self::new(label_property, properties)
	}

	pub fn label_property(&self) -> &str {
		&self.label_property
	}

	pub fn properties_to_search(&self) -> &[String] {
		&self.properties_to_search
	}

	/// Searchable values of the row, in the order the row lists its properties.
	fn searchable_items<'a>(&self, record: &'a Record) -> Vec<SearchableItem<'a>> {
		let mut items = Vec::new();
		for property in record.searchable_keys() {
			if !self.properties_to_search.iter().any(|wanted| wanted == property) {
				continue;
			}
			match record.field(property) {
				Some(FieldValue::Text(text)) => items.push(SearchableItem {
					property,
					text,
					element: false,
				}),
				Some(FieldValue::List(values)) => {
					items.extend(values.into_iter().map(|text| SearchableItem {
						property,
						text,
						element: true,
					}));
				}
				None => {}
			}
		}
		items
	}
}

impl SuggestionFormatter for ResourceFormatter {
	fn annotate(&self, record: &Record, query: &Query) -> AnnotatedRow {
		let label = record.text(&self.label_property).unwrap_or_default();
		let items = self.searchable_items(record);

		let label_matches = query.matches(label);
		let matched_fields = if label_matches {
			Vec::new()
		} else {
			explain(query, &items)
		};
		let matched = label_matches
			|| covers_query(query, std::iter::once(label).chain(items.iter().map(|item| item.text)));

		AnnotatedRow {
			path: record.path().map(str::to_string),
			label: label.to_string(),
			matched,
			is_perfect_match: query.is_exact(label),
			matched_fields,
			record: record.clone(),
		}
	}
}

/// Fields explaining why a row whose label does not match was returned.
///
/// Each text field's excerpt is anchored on the first query word that field
/// contains, not on the query's first word. A field picked to cover a later
/// word would otherwise yield an empty excerpt.
fn explain(query: &Query, items: &[SearchableItem<'_>]) -> Vec<MatchedField> {
	let keyed: Vec<(usize, &str)> = items.iter().map(|item| item.text).enumerate().collect();

	matching_subset(query.text(), &keyed)
		.into_iter()
		.map(|index| {
			let item = &items[index];
			let property = item.property.to_string();
			if item.element {
				return MatchedField::Value {
					property,
					text: item.text.to_string(),
				};
			}
			let anchor = query
				.matched_words(item.text)
				.first()
				.copied()
				.unwrap_or(query.text());
			MatchedField::Excerpt {
				property,
				text: matching_excerpt(anchor, item.text),
			}
		})
		.collect()
}
