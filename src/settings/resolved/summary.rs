use super::{FormatterKind, ResolvedConfig};

pub(super) fn print_summary(config: &ResolvedConfig) {
	print!("{}", format_summary(config));
}

fn format_summary(config: &ResolvedConfig) -> String {
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Rows: {}", config.rows.display()),
		format!("  Keystroke gap: {} ms", config.keystroke_gap.as_millis()),
		format!(
			"  Quiet period: {} ms",
			config.dispatch.quiet_period.as_millis()
		),
		format!("  Max results: {}", config.dispatch.max_results),
		format!(
			"  User entry: {}",
			bool_to_word(config.dispatch.enable_user_entry)
		),
		format!("  Formatter: {}", config.formatter.as_str()),
	];

	match config.formatter {
		FormatterKind::Resource => {
			lines.push(format!("  Label property: {}", config.label_property));
			lines.push(format!("  Primary type: {}", config.primary_type));
		}
		FormatterKind::Vocabulary if config.vocabularies.is_empty() => {
			lines.push("  Vocabularies: (quick search)".to_string());
		}
		FormatterKind::Vocabulary => {
			lines.push(format!("  Vocabularies: {}", config.vocabularies.join(", ")));
			for (vocabulary, categories) in &config.vocabulary_filters {
				lines.push(format!("    {vocabulary} categories: {}", categories.join(", ")));
			}
		}
	}
	if config.properties_to_search.is_empty() {
		lines.push("  Searched properties: (label only)".to_string());
	} else {
		lines.push(format!(
			"  Searched properties: {}",
			config.properties_to_search.join(", ")
		));
	}
	if !config.inputs.is_empty() {
		lines.push(format!("  Inputs: {}", config.inputs.join(" | ")));
	}

	let mut summary = lines.join("\n");
	summary.push('\n');
	summary
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
