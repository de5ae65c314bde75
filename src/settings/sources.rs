use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};
use quicksearch::app_dirs;

use crate::cli::CliArgs;

/// Prefix of the variables overriding file settings, as in
/// `QUICKSEARCH__DISPATCH__MAX_RESULTS=5`.
const ENV_PREFIX: &str = "quicksearch";

/// Keys whose environment value is a comma-separated list, such as
/// `QUICKSEARCH__SUGGEST__VOCABULARIES=HP,MONDO`.
const LIST_KEYS: [&str; 2] = ["suggest.properties_to_search", "suggest.vocabularies"];

/// Stack the setting layers, later ones winning: the user `config.toml`, then
/// `.quicksearch.toml` and `quicksearch.toml` in the working directory (all
/// skipped by `--no-config`), then every `--config` file in order, then
/// `QUICKSEARCH__*` variables. CLI flags are applied after deserializing.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder.add_source(environment()).build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn environment() -> Environment {
	LIST_KEYS.into_iter().fold(
		Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.try_parsing(true)
			.list_separator(","),
		Environment::with_list_parse_key,
	)
}

/// Optional settings files, lowest precedence first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(file) = app_dirs::config_file() {
		files.push(file);
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".quicksearch.toml"));
		files.push(current_dir.join("quicksearch.toml"));
	}

	files
}
