use clap::ValueEnum;

/// Suggestion formatters selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum FormatterArg {
	Resource,
	Vocabulary,
}

impl FormatterArg {
	/// Return the identifier consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			FormatterArg::Resource => "resource",
			FormatterArg::Vocabulary => "vocabulary",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
