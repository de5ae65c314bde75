use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod dispatch;
mod source;
mod suggest;

use dispatch::DispatchSection;
use source::SourceSection;
use suggest::SuggestSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	source: SourceSection,
	dispatch: DispatchSection,
	suggest: SuggestSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.source.apply_cli_overrides(cli);
		self.dispatch.apply_cli_overrides(cli);
		self.suggest.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			quiet_period: detect_source(
				cli.quiet_period_ms.is_some(),
				self.dispatch.quiet_period_ms.is_some(),
				"QUICKSEARCH__DISPATCH__QUIET_PERIOD_MS",
				"--quiet-period-ms",
				"dispatch.quiet_period_ms",
			),
			max_results: detect_source(
				cli.max_results.is_some(),
				self.dispatch.max_results.is_some(),
				"QUICKSEARCH__DISPATCH__MAX_RESULTS",
				"--max-results",
				"dispatch.max_results",
			),
			formatter: detect_source(
				cli.formatter.is_some(),
				self.suggest.formatter.is_some(),
				"QUICKSEARCH__SUGGEST__FORMATTER",
				"--formatter",
				"suggest.formatter",
			),
		};

		let (rows, keystroke_gap) = self.source.resolve()?;
		let dispatch = self.dispatch.resolve();
		let suggest = self.suggest.resolve(&sources)?;

		let config = ResolvedConfig {
			rows,
			inputs: cli.inputs.clone(),
			keystroke_gap,
			dispatch,
			formatter: suggest.formatter,
			label_property: suggest.label_property,
			properties_to_search: suggest.properties_to_search,
			primary_type: suggest.primary_type,
			vocabularies: suggest.vocabularies,
			vocabulary_filters: suggest.vocabulary_filters,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
