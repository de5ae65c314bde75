use anyhow::Result;
use quicksearch::{MatchedField, Suggestion};
use serde_json::json;

use crate::workflow::SearchOutcome;

/// Print the suggestions shown for the final input, one row per line.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	print!("{}", format_plain(outcome));
}

fn format_plain(outcome: &SearchOutcome) -> String {
	if outcome.suggestions.is_empty() {
		return format!("No suggestions (query: '{}')\n", outcome.query);
	}

	let mut lines = Vec::new();
	for suggestion in outcome.suggestions.iter() {
		match suggestion {
			Suggestion::Match(row) => {
				let marker = if row.is_perfect_match { "=" } else { " " };
				match &row.path {
					Some(path) => lines.push(format!("{marker} {} <{path}>", row.label)),
					None => lines.push(format!("{marker} {}", row.label)),
				}
				for field in &row.matched_fields {
					let label = match field {
						MatchedField::Excerpt { .. } => "excerpt",
						MatchedField::Value { .. } => "value",
					};
					lines.push(format!(
						"    {} ({label}): {}",
						field.property(),
						field.text()
					));
				}
			}
			Suggestion::Placeholder { text, .. } => lines.push(format!("  [{text}]")),
			Suggestion::UserEntry { text } => lines.push(format!("+ {text}")),
		}
	}

	let more = outcome.suggestions.more_results();
	if more > 0 {
		lines.push(format!("  ... {more} more"));
	}

	let mut text = lines.join("\n");
	text.push('\n');
	text
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let payload = json!({
		"query": outcome.query,
		"requests": outcome.requests,
		"staleReplies": outcome.stale_replies,
		"suggestions": outcome.suggestions,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use quicksearch::{
		Query, QueryResponse, Record, ResourceFormatter, SuggestionList,
	};
	use serde_json::Value;

	use super::*;

	fn outcome(rows: Value, query: &str) -> SearchOutcome {
		let rows: Vec<Record> = serde_json::from_value(rows).expect("rows");
		let response = QueryResponse {
			total_rows: Some(rows.len() + 2),
			returned_rows: Some(rows.len()),
			rows,
			req: None,
		};
		let formatter = ResourceFormatter::from_property_list(None, "notes");
		SearchOutcome {
			query: query.to_string(),
			requests: 1,
			stale_replies: 0,
			suggestions: SuggestionList::from_response(
				&response,
				&Query::parse(query),
				&formatter,
				false,
			),
		}
	}

	#[test]
	fn plain_output_lists_rows_and_fields() {
		let outcome = outcome(
			json!([
				{"@name": "Knee", "@path": "/Subjects/k"},
				{"@name": "Visit", "notes": "knee swelling"},
			]),
			"knee",
		);
		let text = format_plain(&outcome);
		assert_eq!(
			text,
			"= Knee </Subjects/k>\n  Visit\n    notes (excerpt): knee swelling\n  ... 2 more\n"
		);
	}

	#[test]
	fn plain_output_reports_an_empty_menu() {
		let outcome = SearchOutcome {
			query: String::new(),
			requests: 0,
			stale_replies: 0,
			suggestions: SuggestionList::empty(),
		};
		assert_eq!(format_plain(&outcome), "No suggestions (query: '')\n");
	}

	#[test]
	fn json_format_includes_suggestions() {
		let outcome = outcome(json!([{"@name": "Knee"}]), "kn");
		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["query"], "kn");
		assert_eq!(value["suggestions"]["suggestions"][0]["type"], "match");
		assert_eq!(value["suggestions"]["suggestions"][0]["label"], "Knee");
		assert_eq!(value["suggestions"]["moreResults"], 2);
	}
}
