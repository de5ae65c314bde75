//! Query matching primitives shared by the quicksearch dispatcher and the
//! suggestion formatters.
//!
//! A query is broken into lower-cased words. A candidate item matches when it
//! contains every word. When a record only matches across several fields,
//! [`matching_subset`] picks a small set of fields that together account for
//! every word, and [`matching_excerpt`] cuts a readable snippet around the first
//! word so the UI can show why the record was suggested.

mod cover;
mod excerpt;
mod query;
mod text;

pub use cover::{matching_items, matching_subset};
pub use excerpt::{EXCERPT_RADIUS, ELLIPSIS, matching_excerpt};
pub use query::{Query, matches, parse_query};
