use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where the settings that can fail validation were taken from.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) quiet_period: Option<SettingSource>,
	pub(crate) max_results: Option<SettingSource>,
	pub(crate) formatter: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_quiet_period(&self) -> SettingSource {
		self.quiet_period
			.clone()
			.unwrap_or(SettingSource::ConfigKey("dispatch.quiet_period_ms"))
	}

	pub(crate) fn source_for_max_results(&self) -> SettingSource {
		self.max_results
			.clone()
			.unwrap_or(SettingSource::ConfigKey("dispatch.max_results"))
	}

	pub(crate) fn source_for_formatter(&self) -> SettingSource {
		self.formatter
			.clone()
			.unwrap_or(SettingSource::ConfigKey("suggest.formatter"))
	}
}
