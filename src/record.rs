//! Rows returned by the query endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const PATH_KEY: &str = "@path";
const ERROR_KEY: &str = "error";
const MESSAGE_KEY: &str = "message";

/// One candidate row as returned by the backend.
///
/// Property order is preserved from the payload; formatters rely on it when
/// several fields tie during set-cover selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

/// A searchable property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
	Text(&'a str),
	List(Vec<&'a str>),
}

impl Record {
	pub fn new(properties: Map<String, Value>) -> Self {
		Self(properties)
	}

	/// Build the synthetic row used to report a failed lookup.
	pub fn error(message: impl Into<String>) -> Self {
		let mut properties = Map::new();
		properties.insert(ERROR_KEY.to_string(), Value::Bool(true));
		properties.insert(MESSAGE_KEY.to_string(), Value::String(message.into()));
		Self(properties)
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// The property as a string, when it is one.
	pub fn text(&self, key: &str) -> Option<&str> {
		self.0.get(key).and_then(Value::as_str)
	}

	/// The property as a searchable value: a string or the string elements of
	/// an array. Other JSON types are not searchable.
	pub fn field(&self, key: &str) -> Option<FieldValue<'_>> {
		match self.0.get(key)? {
			Value::String(text) => Some(FieldValue::Text(text)),
			Value::Array(values) => Some(FieldValue::List(
				values.iter().filter_map(Value::as_str).collect(),
			)),
			_ => None,
		}
	}

	/// Every searchable string held by the property.
	pub fn texts(&self, key: &str) -> Vec<&str> {
		match self.field(key) {
			Some(FieldValue::Text(text)) => vec![text],
			Some(FieldValue::List(values)) => values,
			None => Vec::new(),
		}
	}

	/// Names of the properties holding searchable values, in payload order.
	pub fn searchable_keys(&self) -> impl Iterator<Item = &str> {
		self.0
			.iter()
			.filter(|(_, value)| value.is_string() || value.is_array())
			.map(|(key, _)| key.as_str())
	}

	pub fn path(&self) -> Option<&str> {
		self.text(PATH_KEY)
	}

	/// Whether this row reports a failure rather than a resource.
	pub fn is_error(&self) -> bool {
		self.0.get(ERROR_KEY).and_then(Value::as_bool).unwrap_or(false)
	}

	pub fn message(&self) -> Option<&str> {
		self.text(MESSAGE_KEY)
	}
}

impl From<Map<String, Value>> for Record {
	fn from(properties: Map<String, Value>) -> Self {
		Self(properties)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn record(value: Value) -> Record {
		serde_json::from_value(value).expect("record")
	}

	#[test]
	fn fields_accept_strings_and_string_arrays() {
		let row = record(json!({
			"@path": "/Subjects/1",
			"notes": "acute",
			"synonym": ["one", 2, "three"],
			"count": 4,
		}));

		assert_eq!(row.path(), Some("/Subjects/1"));
		assert_eq!(row.field("notes"), Some(FieldValue::Text("acute")));
		assert_eq!(row.texts("synonym"), vec!["one", "three"]);
		assert_eq!(row.field("count"), None);
		assert!(row.texts("missing").is_empty());
	}

	#[test]
	fn searchable_keys_follow_payload_order() {
		let row = record(json!({"zeta": "z", "count": 1, "alpha": ["a"]}));
		let keys: Vec<&str> = row.searchable_keys().collect();
		assert_eq!(keys, vec!["zeta", "alpha"]);
	}

	#[test]
	fn error_rows_round_trip_their_message() {
		let row = Record::error("lookup failed");
		assert!(row.is_error());
		assert_eq!(row.message(), Some("lookup failed"));
		assert!(!Record::default().is_error());
	}
}
