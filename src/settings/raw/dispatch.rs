use std::time::Duration;

use quicksearch::DispatchSettings;
use quicksearch::dispatch::{DEFAULT_MAX_RESULTS, DEFAULT_QUIET_PERIOD};
use serde::Deserialize;

use crate::cli::CliArgs;

/// Debounce and paging options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DispatchSection {
	pub(super) quiet_period_ms: Option<u64>,
	pub(super) max_results: Option<usize>,
	pub(super) enable_user_entry: Option<bool>,
}

impl DispatchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.quiet_period_ms {
			self.quiet_period_ms = Some(value);
		}
		if let Some(value) = cli.max_results {
			self.max_results = Some(value);
		}
		if let Some(value) = cli.enable_user_entry {
			self.enable_user_entry = Some(value);
		}
	}

	/// Range checks happen in validation so errors can name their origin.
	pub(super) fn resolve(self) -> DispatchSettings {
		DispatchSettings {
			quiet_period: self
				.quiet_period_ms
				.map_or(DEFAULT_QUIET_PERIOD, Duration::from_millis),
			max_results: self.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
			enable_user_entry: self.enable_user_entry.unwrap_or(false),
		}
	}
}
