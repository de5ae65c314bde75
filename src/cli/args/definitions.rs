use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{FormatterArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `quicksearch` binary.
#[derive(Parser, Debug)]
#[command(
	name = "quicksearch",
	version,
	long_version = long_version(),
	about = "Replay keystrokes through a debounced quick search and print the suggestions",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "INPUT",
		help = "Successive contents of the search box, one per keystroke (default: none)"
	)]
	pub(crate) inputs: Vec<String>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "QUICKSEARCH_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'r',
		long,
		value_name = "FILE",
		help = "JSON file with the rows to search (default: source.rows)"
	)]
	pub(crate) rows: Option<PathBuf>,
	#[arg(
		short = 'g',
		long = "keystroke-gap-ms",
		value_name = "MS",
		help = "Delay between successive inputs (default: 100)"
	)]
	pub(crate) keystroke_gap_ms: Option<u64>,
	#[arg(
		short = 'q',
		long = "quiet-period-ms",
		value_name = "MS",
		help = "How long input must stay unchanged before it is sent (default: 500)"
	)]
	pub(crate) quiet_period_ms: Option<u64>,
	#[arg(
		short = 'm',
		long = "max-results",
		value_name = "NUM",
		help = "Rows requested per query (default: 10)"
	)]
	pub(crate) max_results: Option<usize>,
	#[arg(
		short = 'u',
		long = "enable-user-entry",
		value_parser = BoolishValueParser::new(),
		help = "Offer the typed text when nothing matches it exactly (default: disabled)"
	)]
	pub(crate) enable_user_entry: Option<bool>,
	#[arg(
		short = 'f',
		long,
		value_enum,
		help = "Choose how rows are labelled and explained (default: resource)"
	)]
	pub(crate) formatter: Option<FormatterArg>,
	#[arg(
		long = "label-property",
		value_name = "NAME",
		help = "Property holding a resource's label (default: @name)"
	)]
	pub(crate) label_property: Option<String>,
	#[arg(
		long = "properties",
		value_delimiter = ',',
		value_name = "NAME",
		help = "Comma-separated properties searched besides the label (default: none)"
	)]
	pub(crate) properties: Option<Vec<String>>,
	#[arg(
		long = "primary-type",
		value_name = "TYPE",
		help = "Node type named in resource queries (default: cards:Resource)"
	)]
	pub(crate) primary_type: Option<String>,
	#[arg(
		long = "vocabularies",
		value_delimiter = ',',
		value_name = "NAME",
		help = "Comma-separated vocabularies searched by the vocabulary formatter (default: none, quick search)"
	)]
	pub(crate) vocabularies: Option<Vec<String>>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'v',
		long,
		help = "Log dispatched queries and dropped replies to stderr (default: disabled)"
	)]
	pub(crate) verbose: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
