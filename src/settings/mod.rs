//! Configuration loading and resolution utilities.
//!
//! Values are layered from default config files, explicit `--config` files,
//! `QUICKSEARCH__*` environment variables and finally CLI flags. `load` is the
//! entry point and returns a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::{FormatterKind, ResolvedConfig};
