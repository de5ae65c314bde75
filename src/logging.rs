//! Diagnostic output for the command line driver.
//!
//! The library only emits `tracing` events; nothing is printed unless a
//! subscriber is installed here.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber.
///
/// `RUST_LOG` wins when set. Otherwise only warnings are shown, or debug
/// events as well when `verbose` is set.
pub fn initialize(verbose: bool) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("quicksearch=debug,warn")
		} else {
			EnvFilter::new("warn")
		}
	});

	// A second initialisation (tests, embedding) keeps the first subscriber.
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}
