use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.dispatch.quiet_period.is_zero() {
		return Err(ConfigError::invalid(
			"dispatch.quiet_period_ms",
			config.dispatch.quiet_period.as_millis().to_string(),
			sources.source_for_quiet_period(),
			"must be greater than zero",
		));
	}

	if config.dispatch.max_results == 0 {
		return Err(ConfigError::invalid(
			"dispatch.max_results",
			config.dispatch.max_results.to_string(),
			sources.source_for_max_results(),
			"must be at least 1",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use quicksearch::DispatchSettings;

	use super::super::{FormatterKind, SettingSource};
	use super::*;

	fn config(dispatch: DispatchSettings) -> ResolvedConfig {
		ResolvedConfig {
			rows: PathBuf::from("/tmp/rows.json"),
			inputs: Vec::new(),
			keystroke_gap: Duration::from_millis(100),
			dispatch,
			formatter: FormatterKind::Resource,
			label_property: "@name".into(),
			properties_to_search: Vec::new(),
			primary_type: "cards:Resource".into(),
			vocabularies: Vec::new(),
			vocabulary_filters: Vec::new(),
		}
	}

	#[test]
	fn validation_rejects_zero_quiet_period() {
		let config = config(DispatchSettings {
			quiet_period: Duration::ZERO,
			..DispatchSettings::default()
		});
		let sources = ConfigSources {
			quiet_period: Some(SettingSource::CliFlag("--quiet-period-ms")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "dispatch.quiet_period_ms"));
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_zero_max_results() {
		let config = config(DispatchSettings {
			max_results: 0,
			..DispatchSettings::default()
		});
		let sources = ConfigSources {
			max_results: Some(SettingSource::Environment(
				"QUICKSEARCH__DISPATCH__MAX_RESULTS",
			)),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "dispatch.max_results"));
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn defaults_pass_validation() {
		let config = config(DispatchSettings::default());
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}
}
