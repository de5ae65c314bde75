//! URLs for the backend lookups a search box can issue.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::dispatch::RequestTag;
use crate::suggest::DEFAULT_LABEL_PROPERTY;

/// Query path of the backend.
pub const DEFAULT_QUERY_PATH: &str = "/query";

/// Base path of the vocabulary search servlets.
pub const DEFAULT_VOCABULARIES_PATH: &str = "/Vocabularies";

/// Node type searched when none is configured.
pub const DEFAULT_PRIMARY_TYPE: &str = "cards:Resource";

/// Characters left alone by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')');

/// Characters left alone in `application/x-www-form-urlencoded` values.
const FORM: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'*')
	.remove(b'-')
	.remove(b'.')
	.remove(b'_');

/// Where, and in which shape, a query is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
	/// Free-text search across every indexed node.
	QuickSearch { path: String },
	/// Full-text `contains` lookup over the properties of one node type.
	Resource {
		path: String,
		primary_type: String,
		label_property: String,
		properties: Vec<String>,
	},
	/// Term suggestions, one lookup per source vocabulary.
	Vocabulary {
		path: String,
		vocabularies: Vec<String>,
		/// Term categories a vocabulary's suggestions are restricted to.
		filters: Vec<(String, Vec<String>)>,
	},
}

impl Default for Endpoint {
	fn default() -> Self {
		Self::quick_search()
	}
}

impl Endpoint {
	pub fn quick_search() -> Self {
		Self::QuickSearch {
			path: DEFAULT_QUERY_PATH.to_string(),
		}
	}

	pub fn resource(
		primary_type: impl Into<String>,
		label_property: impl Into<String>,
		properties: impl IntoIterator<Item = impl Into<String>>,
	) -> Self {
		Self::Resource {
			path: DEFAULT_QUERY_PATH.to_string(),
			primary_type: primary_type.into(),
			label_property: label_property.into(),
			properties: properties.into_iter().map(Into::into).collect(),
		}
	}

	pub fn vocabulary<V, S>(
		vocabularies: V,
		filters: impl IntoIterator<Item = (String, Vec<String>)>,
	) -> Self
	where
		V: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::Vocabulary {
			path: DEFAULT_VOCABULARIES_PATH.to_string(),
			vocabularies: vocabularies.into_iter().map(Into::into).collect(),
			filters: filters.into_iter().collect(),
		}
	}

	/// The URLs asking for at most `limit` rows matching `text`.
	///
	/// Quick search and resource lookups are a single URL. Vocabulary lookups
	/// yield one URL per vocabulary, in order; their servlets pick their own
	/// page size, so `limit` is applied once the answers are merged.
	pub fn urls(&self, text: &str, tag: RequestTag, limit: usize) -> Vec<String> {
		match self {
			Self::QuickSearch { path } => vec![format!(
				"{path}?quick={}&doNotEscapeQuery=true&limit={limit}&req={tag}",
				encode(text)
			)],
			Self::Resource {
				path,
				primary_type,
				label_property,
				properties,
			} => {
				let statement = resource_statement(text, primary_type, label_property, properties);
				vec![format!("{path}?query={}&limit={limit}", encode(&statement))]
			}
			Self::Vocabulary {
				path,
				vocabularies,
				filters,
			} => {
				let suggest = form_encode(&sanitize(text));
				vocabularies
					.iter()
					.map(|vocabulary| {
						let mut url = format!("{path}/{vocabulary}.search.json?suggest={suggest}");
						if let Some(filter) = category_filter(filters, vocabulary) {
							url.push_str("&customFilter=");
							url.push_str(&form_encode(&filter));
						}
						url
					})
					.collect()
			}
		}
	}
}

fn encode(value: &str) -> String {
	utf8_percent_encode(value, COMPONENT).to_string()
}

/// Query-string encoding with spaces written as `+`.
fn form_encode(value: &str) -> String {
	value
		.split(' ')
		.map(|part| utf8_percent_encode(part, FORM).to_string())
		.collect::<Vec<_>>()
		.join("+")
}

/// `(term_category:a OR term_category:b)` for a vocabulary with categories.
fn category_filter(filters: &[(String, Vec<String>)], vocabulary: &str) -> Option<String> {
	let (_, categories) = filters
		.iter()
		.find(|(name, categories)| name == vocabulary && !categories.is_empty())?;
	let terms = categories
		.iter()
		.map(|category| format!("term_category:{category}"))
		.collect::<Vec<_>>()
		.join(" OR ");
	Some(format!("({terms})"))
}

/// `select` statement matching `text` in the label or any searched property.
///
/// Characters other than word characters and whitespace are blanked out so the
/// text cannot break out of the quoted literal.
fn resource_statement(
	text: &str,
	primary_type: &str,
	label_property: &str,
	properties: &[String],
) -> String {
	let sanitized = sanitize(text);
	let label = if label_property.is_empty() {
		DEFAULT_LABEL_PROPERTY
	} else {
		label_property
	};

	let conditions = std::iter::once(label)
		.chain(properties.iter().map(String::as_str))
		.map(|property| format!("contains(r.{property},'*{sanitized}*')"))
		.collect::<Vec<_>>()
		.join(" OR ");

	format!("select distinct r.* from [{primary_type}] as r where {conditions}")
}

fn sanitize(text: &str) -> String {
	text.chars()
		.map(|c| {
			if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
				c
			} else {
				' '
			}
		})
		.collect()
}
