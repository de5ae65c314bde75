//! Where the worker gets its rows from.

use std::fs;
use std::path::{Path, PathBuf};

use quicksearch_matching::Query;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::dispatch::{QueryRequest, TransportError};
use crate::record::Record;
use crate::response::QueryResponse;
use crate::suggest::{LOAD_FAILURE_TEXT, PARTIAL_FAILURE_TEXT, covers_query};

/// Property listing the categories a vocabulary term belongs to.
const TERM_CATEGORY: &str = "term_category";

/// Answers queries on behalf of the backend.
pub trait SuggestionSource {
	fn fetch(&mut self, request: &QueryRequest) -> Result<QueryResponse, TransportError>;
}

impl<F> SuggestionSource for F
where
	F: FnMut(&QueryRequest) -> Result<QueryResponse, TransportError>,
{
	fn fetch(&mut self, request: &QueryRequest) -> Result<QueryResponse, TransportError> {
		self(request)
	}
}

#[derive(Debug, Error)]
pub enum SourceError {
	#[error("failed to read rows from {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("rows are not valid JSON")]
	Parse(#[from] serde_json::Error),

	#[error("expected an array of rows or an object with a \"rows\" array, found {0}")]
	Shape(&'static str),

	#[error("expected an object mapping vocabulary names to rows, found {0}")]
	VocabularyShape(&'static str),
}

/// Rows held in memory, searched the way the quick-search backend does:
/// a row is returned when every query word occurs in at least one of its
/// searchable properties.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
	rows: Vec<Record>,
	/// Properties searched; every string or array property when empty.
	searchable: Vec<String>,
	/// Only rows in one of these term categories are returned, when set.
	categories: Vec<String>,
}

impl StaticSource {
	pub fn new(rows: Vec<Record>) -> Self {
		Self {
			rows,
			searchable: Vec::new(),
			categories: Vec::new(),
		}
	}

	/// Limit matching to `properties`.
	pub fn with_searchable<I, S>(mut self, properties: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.searchable = properties.into_iter().map(Into::into).collect();
		self
	}

	/// Keep only rows whose `term_category` names one of `categories`.
	pub fn with_categories<I, S>(mut self, categories: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.categories = categories.into_iter().map(Into::into).collect();
		self
	}

	/// Accepts a bare array of rows or a response-shaped `{"rows": [...]}`.
	pub fn from_json(json: &str) -> Result<Self, SourceError> {
		Self::from_value(serde_json::from_str(json)?)
	}

	pub fn from_path(path: &Path) -> Result<Self, SourceError> {
		Self::from_json(&read(path)?)
	}

	/// One source per vocabulary from an object such as
	/// `{"HP": [...], "MONDO": {"rows": [...]}}`, in file order.
	pub fn by_vocabulary_from_json(json: &str) -> Result<Vec<(String, Self)>, SourceError> {
		match serde_json::from_str::<Value>(json)? {
			Value::Object(object) => object
				.into_iter()
				.map(|(name, rows)| Ok((name, Self::from_value(rows)?)))
				.collect(),
			other => Err(SourceError::VocabularyShape(kind(&other))),
		}
	}

	pub fn by_vocabulary_from_path(path: &Path) -> Result<Vec<(String, Self)>, SourceError> {
		Self::by_vocabulary_from_json(&read(path)?)
	}

	fn from_value(value: Value) -> Result<Self, SourceError> {
		let rows = match value {
			Value::Array(rows) => rows,
			Value::Object(mut object) => match object.remove("rows") {
				Some(Value::Array(rows)) => rows,
				Some(other) => return Err(SourceError::Shape(kind(&other))),
				None => return Err(SourceError::Shape("an object without rows")),
			},
			other => return Err(SourceError::Shape(kind(&other))),
		};

		let rows = rows
			.into_iter()
			.map(serde_json::from_value)
			.collect::<Result<Vec<Record>, _>>()?;
		Ok(Self::new(rows))
	}

	pub fn rows(&self) -> &[Record] {
		&self.rows
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	fn is_hit(&self, row: &Record, query: &Query) -> bool {
		if row.is_error() {
			return true;
		}
		if !self.categories.is_empty()
			&& !row
				.texts(TERM_CATEGORY)
				.iter()
				.any(|category| self.categories.iter().any(|wanted| wanted.as_str() == *category))
		{
			return false;
		}
		if self.searchable.is_empty() {
			let texts = row.searchable_keys().flat_map(|key| row.texts(key));
			covers_query(query, texts)
		} else {
			let texts = self.searchable.iter().flat_map(|key| row.texts(key));
			covers_query(query, texts)
		}
	}
}

impl SuggestionSource for StaticSource {
	fn fetch(&mut self, request: &QueryRequest) -> Result<QueryResponse, TransportError> {
		let query = Query::parse(request.text.as_str());
		let hits: Vec<&Record> = self
			.rows
			.iter()
			.filter(|row| self.is_hit(row, &query))
			.collect();

		let total = hits.len();
		let rows: Vec<Record> = hits.into_iter().take(request.limit).cloned().collect();
		Ok(QueryResponse {
			returned_rows: Some(rows.len()),
			total_rows: Some(total),
			req: Some(request.tag.get()),
			rows,
		})
	}
}

/// Vocabularies searched one after another, their rows merged into one answer.
///
/// A vocabulary that fails is skipped. When some vocabularies answered, the
/// merged rows are led by an error row saying that some suggestions are
/// missing; when none did, the answer is that single error row. The merged
/// list is cut to the request's limit.
#[derive(Default)]
pub struct VocabularySource {
	vocabularies: Vec<(String, Box<dyn SuggestionSource + Send>)>,
}

impl VocabularySource {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append `name`, answered by `source`. Vocabularies are asked in the
	/// order they were added.
	pub fn with_vocabulary<S>(mut self, name: impl Into<String>, source: S) -> Self
	where
		S: SuggestionSource + Send + 'static,
	{
		self.vocabularies.push((name.into(), Box::new(source)));
		self
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.vocabularies.iter().map(|(name, _)| name.as_str())
	}

	pub fn len(&self) -> usize {
		self.vocabularies.len()
	}

	pub fn is_empty(&self) -> bool {
		self.vocabularies.is_empty()
	}
}

impl SuggestionSource for VocabularySource {
	fn fetch(&mut self, request: &QueryRequest) -> Result<QueryResponse, TransportError> {
		let mut rows = Vec::new();
		let mut failed = 0;

		for (index, (name, source)) in self.vocabularies.iter_mut().enumerate() {
			let lookup = QueryRequest {
				urls: request.urls.get(index).cloned().into_iter().collect(),
				..request.clone()
			};
			match source.fetch(&lookup) {
				Ok(response) => rows.extend(response.rows),
				Err(error) => {
					warn!(vocabulary = %name, %error, "cannot load answer suggestions");
					failed += 1;
				}
			}
		}

		if failed == self.vocabularies.len() {
			rows = vec![Record::error(LOAD_FAILURE_TEXT)];
		} else if failed > 0 {
			rows.insert(0, Record::error(PARTIAL_FAILURE_TEXT));
		}
		rows.truncate(request.limit);

		Ok(QueryResponse {
			req: Some(request.tag.get()),
			..QueryResponse::new(rows)
		})
	}
}

fn read(path: &Path) -> Result<String, SourceError> {
	fs::read_to_string(path).map_err(|source| SourceError::Io {
		path: path.to_path_buf(),
		source,
	})
}

fn kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
