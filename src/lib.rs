//! Title-case text filter for the [Tera](https://keats.github.io/tera/) template engine.
//!
//! Provides a single filter, `title_case`, that uppercases the first character
//! of every whitespace-delimited token and lowercases the rest:
//!
//! ```text
//! {{ "the quick brown fox" | title_case }}  =>  The Quick Brown Fox
//! ```
//!
//! The filter is installed into a host-owned [`Tera`] instance with
//! [`register_filters`], called once while the host constructs its engine,
//! before any rendering starts. The transformation itself is pure and
//! stateless, so concurrent renders need no coordination.

pub mod filters;

pub use filters::{title_case, to_title_case};

use tera::Tera;

/// Register the `title_case` filter on a Tera instance.
///
/// Filters registered here are available to every template the instance
/// renders, under that exact name.
pub fn register_filters(tera: &mut Tera) {
    tera.register_filter("title_case", filters::title_case);
    tracing::debug!("template filters registered");
}
