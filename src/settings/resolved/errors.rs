use thiserror::Error;

use super::SettingSource;

const VOCABULARY_FILTERS_KEY: &str = "suggest.vocabulary_filters";

/// A setting that deserialized but cannot drive a search, such as
/// `dispatch.quiet_period_ms = 0`.
///
/// The message names the layer the value came from so that a stray
/// `QUICKSEARCH__*` variable is told apart from a file key or a flag.
#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn invalid(
		key: &'static str,
		value: impl Into<String>,
		origin: SettingSource,
		reason: impl Into<String>,
	) -> Self {
		Self {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}

	/// Categories listed for `vocabulary`, which is not among those searched.
	pub(crate) fn unsearched_vocabulary(vocabulary: impl Into<String>) -> Self {
		Self::invalid(
			VOCABULARY_FILTERS_KEY,
			vocabulary,
			SettingSource::ConfigKey(VOCABULARY_FILTERS_KEY),
			"names a vocabulary missing from suggest.vocabularies",
		)
	}
}
