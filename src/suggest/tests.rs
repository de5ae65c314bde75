use quicksearch_matching::Query;
use serde_json::{Value, json};

use super::*;
use crate::dispatch::TransportError;
use crate::record::Record;
use crate::response::QueryResponse;

fn record(value: Value) -> Record {
	serde_json::from_value(value).expect("record")
}

fn clinical_formatter() -> ResourceFormatter {
	ResourceFormatter::from_property_list(Some("title"), "notes, diagnosis, keywords")
}

#[test]
fn label_match_needs_no_supporting_fields() {
	let row = record(json!({
		"@path": "/Subjects/1",
		"title": "Acute pain clinic referral",
		"notes": "acute pain",
	}));

	let annotated = clinical_formatter().annotate(&row, &Query::parse("acute pain"));
	assert!(annotated.matched);
	assert!(!annotated.is_perfect_match);
	assert!(annotated.matched_fields.is_empty());
	assert_eq!(annotated.path.as_deref(), Some("/Subjects/1"));
	assert_eq!(annotated.label, "Acute pain clinic referral");
}

#[test]
fn fields_covering_the_query_are_listed_in_record_order() {
	let row = record(json!({
		"title": "Visit 3",
		"notes": "patient reports acute symptoms",
		"diagnosis": "chronic pain",
	}));

	let annotated = clinical_formatter().annotate(&row, &Query::parse("acute pain"));
	assert!(annotated.matched);
	let properties: Vec<&str> = annotated
		.matched_fields
		.iter()
		.map(MatchedField::property)
		.collect();
	assert_eq!(properties, vec!["notes", "diagnosis"]);
	assert_eq!(annotated.matched_fields[1].text(), "chronic pain");
}

#[test]
fn excerpts_center_on_a_word_the_field_contains() {
	let row = record(json!({
		"title": "Visit 4",
		"notes": "Seen on Monday. Reports sharp pain in the left knee after a long run.",
		"diagnosis": "acute injury",
	}));

	let annotated = clinical_formatter().annotate(&row, &Query::parse("acute pain"));
	let notes = annotated
		.matched_fields
		.iter()
		.find(|field| field.property() == "notes")
		.expect("notes explain the match");
	assert!(notes.text().contains("pain"));
	assert!(!notes.text().contains("Monday"));
}

#[test]
fn list_elements_are_shown_verbatim() {
	let row = record(json!({
		"title": "Form A",
		"keywords": ["cardiology", "rehab"],
	}));

	let annotated = clinical_formatter().annotate(&row, &Query::parse("rehab"));
	assert_eq!(
		annotated.matched_fields,
		vec![MatchedField::Value {
			property: "keywords".into(),
			text: "rehab".into(),
		}]
	);
}

#[test]
fn unconfigured_and_missing_properties_contribute_nothing() {
	let row = record(json!({
		"title": "Form B",
		"comments": "acute pain",
	}));

	let annotated = clinical_formatter().annotate(&row, &Query::parse("acute pain"));
	assert!(!annotated.matched);
	assert!(annotated.matched_fields.is_empty());

	let unlabelled = ResourceFormatter::default().annotate(&row, &Query::parse("acute"));
	assert_eq!(unlabelled.label, "");
	assert!(!unlabelled.matched);
}

#[test]
fn perfect_match_ignores_case() {
	let row = record(json!({"@name": "Acute Pain"}));
	let annotated = ResourceFormatter::default().annotate(&row, &Query::parse("acute pain"));
	assert!(annotated.is_perfect_match);
}

#[test]
fn property_list_parsing_trims_entries() {
	let formatter = ResourceFormatter::from_property_list(None, " notes ,, diagnosis ");
	assert_eq!(formatter.label_property(), DEFAULT_LABEL_PROPERTY);
	assert_eq!(formatter.properties_to_search(), ["notes", "diagnosis"]);
}

#[test]
fn vocabulary_terms_fall_back_to_synonyms_then_definition() {
	let term = record(json!({
		"@path": "/Vocabularies/HP/HP0012532",
		"label": "Chronic pain",
		"synonym": ["Persistent pain", "Long-standing pain"],
		"def": ["Pain lasting longer than three months. Often refractory to treatment."],
	}));

	let by_synonym = VocabularyFormatter.annotate(&term, &Query::parse("persistent"));
	assert_eq!(by_synonym.matched_fields.len(), 1);
	assert_eq!(by_synonym.matched_fields[0].text(), "Persistent pain");

	let by_definition = VocabularyFormatter.annotate(&term, &Query::parse("months"));
	assert_eq!(
		by_definition.matched_fields,
		vec![MatchedField::Excerpt {
			property: "def".into(),
			text: "...lasting longer than three months".into(),
		}]
	);

	let by_label = VocabularyFormatter.annotate(&term, &Query::parse("chronic"));
	assert!(by_label.matched_fields.is_empty());
	assert!(by_label.matched);
}

#[test]
fn vocabulary_synonym_can_be_a_perfect_match() {
	let term = record(json!({
		"name": "Hypertension",
		"has_exact_synonym": ["High blood pressure"],
	}));

	let annotated = VocabularyFormatter.annotate(&term, &Query::parse("high blood pressure"));
	assert!(annotated.is_perfect_match);
	assert_eq!(annotated.label, "Hypertension");
	assert_eq!(annotated.matched_fields[0].property(), "has_exact_synonym");
}

#[test]
fn empty_response_shows_no_results() {
	let list = SuggestionList::from_response(
		&QueryResponse::default(),
		&Query::parse("zzz"),
		&ResourceFormatter::default(),
		false,
	);
	assert_eq!(list.placeholder_kind(), Some(PlaceholderKind::NoResults));
	assert!(list.suggestions()[0].is_disabled());
}

#[test]
fn user_entry_is_offered_without_a_perfect_match() {
	let response = QueryResponse::new(vec![record(json!({"@name": "Acute pain"}))]);
	let query = Query::parse("acute");
	let list = SuggestionList::from_response(&response, &query, &ResourceFormatter::default(), true);

	let labels: Vec<&str> = list.iter().map(Suggestion::label).collect();
	assert_eq!(labels, vec!["Acute pain", NONE_OF_ABOVE_TEXT, "acute"]);
	assert!(matches!(list.suggestions()[2], Suggestion::UserEntry { .. }));

	let empty = SuggestionList::from_response(
		&QueryResponse::default(),
		&query,
		&ResourceFormatter::default(),
		true,
	);
	let labels: Vec<&str> = empty.iter().map(Suggestion::label).collect();
	assert_eq!(labels, vec![USER_ENTRY_NO_RESULTS_TEXT, "acute"]);
}

#[test]
fn perfect_match_suppresses_user_entry() {
	let response = QueryResponse::new(vec![record(json!({"@name": "Acute"}))]);
	let list = SuggestionList::from_response(
		&response,
		&Query::parse("ACUTE"),
		&ResourceFormatter::default(),
		true,
	);
	assert_eq!(list.len(), 1);
	assert!(list.suggestions()[0].is_perfect_match());
}

#[test]
fn error_rows_and_paging_are_carried_over() {
	let response = QueryResponse {
		rows: vec![
			Record::error("Some answer suggestions for this question could not be loaded"),
			record(json!({"@name": "Acute pain"})),
		],
		total_rows: Some(8),
		returned_rows: Some(2),
		req: None,
	};
	let list = SuggestionList::from_response(
		&response,
		&Query::parse("acute"),
		&ResourceFormatter::default(),
		false,
	);

	assert_eq!(list.more_results(), 6);
	assert!(list.suggestions()[0].is_disabled());
	assert_eq!(
		list.suggestions()[0].label(),
		"Some answer suggestions for this question could not be loaded"
	);
	assert_eq!(list.matches().count(), 1);
}

#[test]
fn transport_failures_become_one_error_row() {
	let list = SuggestionList::failed(&TransportError::http(503, "Service Unavailable"));
	assert_eq!(list.placeholder_kind(), Some(PlaceholderKind::Error));
	assert_eq!(list.suggestions()[0].label(), "Error: Service Unavailable (503)");
}

#[test]
fn serialized_rows_carry_type_tags() {
	let list = SuggestionList::searching();
	let value = serde_json::to_value(&list).expect("json");
	assert_eq!(value["suggestions"][0]["type"], "placeholder");
	assert_eq!(value["suggestions"][0]["kind"], "searching");
	assert_eq!(value["moreResults"], 0);
}
