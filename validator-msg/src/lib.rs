//! Human-readable messages for schema validation errors.
//!
//! Whatever engine does the validating only has to implement [`Schema`],
//! reporting every failed rule as an [`ErrorDetail`]. A [`Formatter`] turns
//! those into a bulleted, optionally colored text block:
//!
//! ```text
//! Error defining graph!
//! ➤ X coordinate must be a number
//! ➤ Y coordinate must be a number
//! ```
//!
//! The free functions in this crate use a process-wide default formatter.
//! Configure it once at startup, before validating from several threads.
//! Code that wants its own settings can hold a [`Formatter`] instead.

mod breadcrumb;
mod details;
mod error;
mod formatter;
pub mod style;
#[cfg(test)]
mod tests;
#[cfg(feature = "yaml")]
pub mod yaml;

use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;

pub use breadcrumb::{Breadcrumb, BreadcrumbSegment};
pub use details::{ErrorDetail, ErrorDetails};
pub use error::ValidationFailed;
pub use formatter::{Formatter, FormatterOptions, DEFAULT_BULLET};
pub use style::{Identity, TextStyler};
#[cfg(feature = "yaml")]
pub use yaml_rust;

/// A validation engine checking values of type `V`.
///
/// Implementations must collect every failing rule rather than stopping at
/// the first one.
pub trait Schema<V: ?Sized> {
    fn check(&self, value: &V) -> Result<(), ErrorDetails>;
}

impl<V, F> Schema<V> for F
where
    V: ?Sized,
    F: Fn(&V) -> Result<(), ErrorDetails>,
{
    fn check(&self, value: &V) -> Result<(), ErrorDetails> {
        self(value)
    }
}

static DEFAULT_FORMATTER: Lazy<RwLock<Formatter>> =
    Lazy::new(|| RwLock::new(Formatter::default()));

fn with_default<T>(f: impl FnOnce(&Formatter) -> T) -> T {
    let formatter = DEFAULT_FORMATTER
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    f(&formatter)
}

/// Updates the process-wide formatter, see [`Formatter::configure`].
pub fn configure(options: FormatterOptions) {
    let mut formatter = DEFAULT_FORMATTER
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    formatter.configure(options);
}

/// A copy of the process-wide formatter as currently configured.
pub fn formatter() -> Formatter {
    with_default(Formatter::clone)
}

pub fn render_errors(details: &ErrorDetails, mention_wrong_value_with: &str) -> String {
    with_default(|formatter| formatter.render_errors(details, mention_wrong_value_with))
}

pub fn validate<V, S>(value: &V, schema: &S, mention_wrong_value_with: &str) -> String
where
    V: ?Sized,
    S: Schema<V> + ?Sized,
{
    with_default(|formatter| formatter.validate(value, schema, mention_wrong_value_with))
}

pub fn assert_valid<V, S>(
    value: &V,
    schema: &S,
    mention_wrong_value_with: &str,
    title: &str,
) -> Result<(), ValidationFailed>
where
    V: ?Sized,
    S: Schema<V> + ?Sized,
{
    with_default(|formatter| formatter.assert_valid(value, schema, mention_wrong_value_with, title))
}

pub fn combine_checks<I>(title: &str, results: I) -> Result<(), ValidationFailed>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    with_default(|formatter| formatter.combine_checks(title, results))
}

pub fn attempt_valid<V, S>(
    value: V,
    schema: &S,
    mention_wrong_value_with: &str,
    title: &str,
) -> Result<V, ValidationFailed>
where
    S: Schema<V> + ?Sized,
{
    with_default(|formatter| formatter.attempt_valid(value, schema, mention_wrong_value_with, title))
}
