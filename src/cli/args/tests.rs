use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, FormatterArg, OutputFormat};

#[test]
fn command_supports_custom_styles() {
	let command = CliArgs::command();
	assert!(command.get_about().is_some());
	command.debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["quicksearch"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.inputs.is_empty());
	assert_eq!(parsed.enable_user_entry, None);
}

#[test]
fn inputs_and_lists_are_collected() {
	let parsed = CliArgs::parse_from([
		"quicksearch",
		"--rows",
		"rows.json",
		"--properties",
		"notes,diagnosis",
		"--formatter",
		"vocabulary",
		"--vocabularies",
		"HP,MONDO",
		"--enable-user-entry",
		"yes",
		"ac",
		"acute",
	]);
	assert_eq!(parsed.inputs, vec!["ac", "acute"]);
	assert_eq!(
		parsed.properties,
		Some(vec!["notes".to_string(), "diagnosis".to_string()])
	);
	assert_eq!(parsed.formatter, Some(FormatterArg::Vocabulary));
	assert_eq!(
		parsed.vocabularies,
		Some(vec!["HP".to_string(), "MONDO".to_string()])
	);
	assert_eq!(parsed.enable_user_entry, Some(true));
}
