//! Payload answering a dispatched query.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Rows returned for one query, along with the backend's paging counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
	#[serde(default)]
	pub rows: Vec<Record>,
	#[serde(default, rename = "totalrows", skip_serializing_if = "Option::is_none")]
	pub total_rows: Option<usize>,
	#[serde(default, rename = "returnedrows", skip_serializing_if = "Option::is_none")]
	pub returned_rows: Option<usize>,
	/// Request tag echoed back by the endpoint, when it supports one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub req: Option<u64>,
}

impl QueryResponse {
	pub fn new(rows: Vec<Record>) -> Self {
		Self {
			rows,
			..Self::default()
		}
	}

	/// How many matches the backend found beyond the rows it returned.
	pub fn more_results(&self) -> usize {
		match (self.total_rows, self.returned_rows) {
			(Some(total), Some(returned)) => total.saturating_sub(returned),
			_ => 0,
		}
	}
}
