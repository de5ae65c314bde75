/// Trim property or vocabulary names and drop blank or repeated entries,
/// keeping order.
pub(super) fn sanitize_names(values: Vec<String>) -> Vec<String> {
	let mut cleaned: Vec<String> = Vec::with_capacity(values.len());
	for value in values {
		let trimmed = value.trim();
		if trimmed.is_empty() || cleaned.iter().any(|seen| seen == trimmed) {
			continue;
		}
		cleaned.push(trimmed.to_string());
	}
	cleaned
}

/// Treat a blank string as unset.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn properties_are_trimmed_and_deduplicated() {
		let cleaned = sanitize_names(vec![
			" notes ".into(),
			"".into(),
			"diagnosis".into(),
			"notes".into(),
		]);
		assert_eq!(cleaned, vec!["notes", "diagnosis"]);
	}

	#[test]
	fn blank_values_are_unset() {
		assert_eq!(non_blank(Some("  ".into())), None);
		assert_eq!(non_blank(Some(" @name ".into())), Some("@name".into()));
		assert_eq!(non_blank(None), None);
	}
}
