use std::collections::BTreeMap;

use anyhow::{Error, Result};
use quicksearch::endpoint::DEFAULT_PRIMARY_TYPE;
use quicksearch::suggest::DEFAULT_LABEL_PROPERTY;
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources, FormatterKind};
use super::super::util::{non_blank, sanitize_names};
use crate::cli::CliArgs;

/// How rows are labelled and which properties explain a match.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SuggestSection {
	pub(super) formatter: Option<String>,
	pub(super) label_property: Option<String>,
	pub(super) properties_to_search: Option<Vec<String>>,
	pub(super) primary_type: Option<String>,
	pub(super) vocabularies: Option<Vec<String>>,
	/// Term categories per vocabulary, e.g. `HP = ["HP:0000118"]`.
	pub(super) vocabulary_filters: Option<BTreeMap<String, Vec<String>>>,
}

pub(super) struct SuggestResolution {
	pub(super) formatter: FormatterKind,
	pub(super) label_property: String,
	pub(super) properties_to_search: Vec<String>,
	pub(super) primary_type: String,
	pub(super) vocabularies: Vec<String>,
	pub(super) vocabulary_filters: Vec<(String, Vec<String>)>,
}

impl SuggestSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(formatter) = cli.formatter {
			self.formatter = Some(formatter.as_str().to_string());
		}
		if let Some(label) = cli.label_property.clone() {
			self.label_property = Some(label);
		}
		if let Some(properties) = &cli.properties {
			self.properties_to_search = Some(properties.clone());
		}
		if let Some(primary_type) = cli.primary_type.clone() {
			self.primary_type = Some(primary_type);
		}
		if let Some(vocabularies) = &cli.vocabularies {
			self.vocabularies = Some(vocabularies.clone());
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<SuggestResolution> {
		let formatter = match non_blank(self.formatter) {
			None => FormatterKind::default(),
			Some(name) => FormatterKind::from_name(&name).ok_or_else(|| {
				Error::new(ConfigError::invalid(
					"suggest.formatter",
					name.clone(),
					sources.source_for_formatter(),
					"must be one of: resource, vocabulary",
				))
			})?,
		};

		let vocabularies = sanitize_names(self.vocabularies.unwrap_or_default());
		let vocabulary_filters =
			resolve_filters(&vocabularies, self.vocabulary_filters.unwrap_or_default())?;

		Ok(SuggestResolution {
			formatter,
			label_property: non_blank(self.label_property)
				.unwrap_or_else(|| DEFAULT_LABEL_PROPERTY.to_string()),
			properties_to_search: sanitize_names(self.properties_to_search.unwrap_or_default()),
			primary_type: non_blank(self.primary_type)
				.unwrap_or_else(|| DEFAULT_PRIMARY_TYPE.to_string()),
			vocabularies,
			vocabulary_filters,
		})
	}
}

/// Key every filter by the spelling used in `vocabularies`.
///
/// Table keys are matched ignoring ASCII case. A filter for a vocabulary that
/// is not searched is rejected.
fn resolve_filters(
	vocabularies: &[String],
	filters: BTreeMap<String, Vec<String>>,
) -> Result<Vec<(String, Vec<String>)>> {
	filters
		.into_iter()
		.map(|(key, categories)| {
			let vocabulary = vocabularies
				.iter()
				.find(|vocabulary| vocabulary.eq_ignore_ascii_case(key.trim()))
				.ok_or_else(|| Error::new(ConfigError::unsearched_vocabulary(key.clone())))?;
			Ok((vocabulary.clone(), sanitize_names(categories)))
		})
		.collect()
}
