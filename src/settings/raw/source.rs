use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::cli::CliArgs;

/// Delay between replayed inputs when none is configured.
const DEFAULT_KEYSTROKE_GAP_MS: u64 = 100;

/// Where rows come from and how inputs are replayed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SourceSection {
	pub(super) rows: Option<PathBuf>,
	pub(super) keystroke_gap_ms: Option<u64>,
}

impl SourceSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(rows) = cli.rows.clone() {
			self.rows = Some(rows);
		}
		if let Some(gap) = cli.keystroke_gap_ms {
			self.keystroke_gap_ms = Some(gap);
		}
	}

	pub(super) fn resolve(self) -> Result<(PathBuf, Duration)> {
		let Some(mut rows) = self.rows else {
			bail!("no rows to search; pass --rows or set source.rows");
		};
		if rows.is_relative() {
			rows = env::current_dir()
				.context("failed to resolve current directory for rows")?
				.join(rows);
		}

		let gap = Duration::from_millis(self.keystroke_gap_ms.unwrap_or(DEFAULT_KEYSTROKE_GAP_MS));
		Ok((rows, gap))
	}
}
