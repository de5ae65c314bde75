use std::path::PathBuf;
use std::time::Duration;

use quicksearch::DispatchSettings;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Which suggestion formatter annotates the rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatterKind {
	#[default]
	Resource,
	Vocabulary,
}

impl FormatterKind {
	pub fn from_name(name: &str) -> Option<Self> {
		match name.trim().to_ascii_lowercase().as_str() {
			"resource" => Some(Self::Resource),
			"vocabulary" => Some(Self::Vocabulary),
			_ => None,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Resource => "resource",
			Self::Vocabulary => "vocabulary",
		}
	}
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub rows: PathBuf,
	pub inputs: Vec<String>,
	pub keystroke_gap: Duration,
	pub dispatch: DispatchSettings,
	pub formatter: FormatterKind,
	pub label_property: String,
	pub properties_to_search: Vec<String>,
	pub primary_type: String,
	/// Vocabularies searched by the vocabulary formatter; quick search when empty.
	pub vocabularies: Vec<String>,
	pub vocabulary_filters: Vec<(String, Vec<String>)>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
