//! Where `quicksearch` looks for its user-level `config.toml`.
//!
//! `QUICKSEARCH_CONFIG_DIR` replaces the platform location (for example
//! `~/.config/quicksearch` on Linux) resolved through `directories`.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "quicksearch";

pub const CONFIG_DIR_ENV: &str = "QUICKSEARCH_CONFIG_DIR";

/// User-level settings file, read before `.quicksearch.toml` in the working
/// directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory holding [`CONFIG_FILE_NAME`].
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = override_dir(env::var_os(CONFIG_DIR_ENV)) {
		return Ok(dir);
	}

	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.map(|dirs| dirs.config_local_dir().to_path_buf())
		.ok_or_else(|| anyhow!("no home directory to place quicksearch settings in"))
}

/// Path of the user-level `config.toml`, whether or not it exists.
pub fn config_file() -> Result<PathBuf> {
	Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// `QUICKSEARCH_CONFIG_DIR=` (empty) counts as unset.
fn override_dir(value: Option<OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_override_falls_back_to_the_platform_directory() {
		assert_eq!(override_dir(None), None);
		assert_eq!(override_dir(Some(OsString::new())), None);
		assert_eq!(
			override_dir(Some(OsString::from("/etc/quicksearch"))),
			Some(PathBuf::from("/etc/quicksearch"))
		);
	}

	#[test]
	fn settings_file_lives_in_the_config_directory() {
		if let (Ok(dir), Ok(file)) = (get_config_dir(), config_file()) {
			assert_eq!(file, dir.join("config.toml"));
		}
	}
}
