use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::io::Write;
	use std::time::Duration;

	use clap::Parser;
	use tempfile::NamedTempFile;

	use super::*;
	use crate::settings::FormatterKind;

	fn config_file(contents: &str) -> NamedTempFile {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.expect("temp file");
		file.write_all(contents.as_bytes()).expect("write config");
		file
	}

	#[test]
	fn file_values_are_resolved() {
		let file = config_file(
			r#"
[source]
rows = "terms.json"
keystroke_gap_ms = 20

[dispatch]
quiet_period_ms = 250
max_results = 5
enable_user_entry = true

[suggest]
formatter = "vocabulary"
properties_to_search = ["synonym", " def "]
"#,
		);
		let path = file.path().to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["quicksearch", "--no-config", "--config", path.as_str()]);

		let config = load(&cli).expect("config");
		assert_eq!(config.rows.file_name().and_then(|name| name.to_str()), Some("terms.json"));
		assert_eq!(config.keystroke_gap, Duration::from_millis(20));
		assert_eq!(config.dispatch.quiet_period, Duration::from_millis(250));
		assert_eq!(config.dispatch.max_results, 5);
		assert!(config.dispatch.enable_user_entry);
		assert_eq!(config.formatter, FormatterKind::Vocabulary);
		assert_eq!(config.properties_to_search, vec!["synonym", "def"]);
	}

	#[test]
	fn vocabulary_tables_are_read() {
		let file = config_file(
			r#"
[source]
rows = "terms.json"

[suggest]
formatter = "vocabulary"
vocabularies = ["HP", "MONDO"]

[suggest.vocabulary_filters]
HP = ["HP:0000118"]
"#,
		);
		let path = file.path().to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["quicksearch", "--no-config", "--config", path.as_str()]);

		let config = load(&cli).expect("config");
		assert_eq!(config.vocabularies, vec!["HP", "MONDO"]);
		assert_eq!(
			config.vocabulary_filters,
			vec![("HP".to_string(), vec!["HP:0000118".to_string()])]
		);
	}

	#[test]
	fn cli_flags_override_files() {
		let file = config_file("[dispatch]\nmax_results = 5\n");
		let path = file.path().to_string_lossy().into_owned();
		let cli = CliArgs::parse_from([
			"quicksearch",
			"--no-config",
			"--config",
			path.as_str(),
			"--rows",
			"rows.json",
			"--max-results",
			"3",
		]);

		let config = load(&cli).expect("config");
		assert_eq!(config.dispatch.max_results, 3);
		assert_eq!(config.formatter, FormatterKind::Resource);
	}

	#[test]
	fn zero_quiet_period_names_its_origin() {
		let file = config_file("[source]\nrows = \"rows.json\"\n[dispatch]\nquiet_period_ms = 0\n");
		let path = file.path().to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["quicksearch", "--no-config", "--config", path.as_str()]);

		let message = load(&cli).expect_err("invalid").to_string();
		assert!(message.contains("dispatch.quiet_period_ms"));
		assert!(message.contains("configuration key"));
	}

	#[test]
	fn missing_rows_are_reported() {
		let cli = CliArgs::parse_from(["quicksearch", "--no-config"]);
		let message = load(&cli).expect_err("no rows").to_string();
		assert!(message.contains("--rows"));
	}

	#[test]
	fn explicit_config_files_must_exist() {
		let cli = CliArgs::parse_from([
			"quicksearch",
			"--no-config",
			"--config",
			"/nonexistent/quicksearch.toml",
		]);
		assert!(load(&cli).is_err());
	}
}
