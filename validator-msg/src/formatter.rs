use std::sync::Arc;

use tracing::{debug, trace};

use crate::details::ErrorDetails;
use crate::error::ValidationFailed;
use crate::style::{Identity, TextStyler};
use crate::Schema;

pub const DEFAULT_BULLET: &str = "➤";

/// Rendered in place of a value the engine reported as absent.
const ABSENT_VALUE: &str = "undefined";

/// Partial update of a [`Formatter`]. Fields left as `None` keep whatever the
/// formatter currently uses.
#[derive(Clone, Default)]
pub struct FormatterOptions {
    pub bullet: Option<String>,
    pub color: Option<Arc<dyn TextStyler>>,
    pub title_color: Option<Arc<dyn TextStyler>>,
}

impl FormatterOptions {
    pub fn new() -> Self {
        FormatterOptions::default()
    }

    pub fn bullet<B: Into<String>>(mut self, bullet: B) -> Self {
        self.bullet = Some(bullet.into());
        self
    }

    pub fn color<S: TextStyler + 'static>(mut self, styler: S) -> Self {
        self.color = Some(Arc::new(styler));
        self
    }

    pub fn title_color<S: TextStyler + 'static>(mut self, styler: S) -> Self {
        self.title_color = Some(Arc::new(styler));
        self
    }
}

impl std::fmt::Debug for FormatterOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatterOptions")
            .field("bullet", &self.bullet)
            .field("color", &self.color.is_some())
            .field("title_color", &self.title_color.is_some())
            .finish()
    }
}

/// Presentation settings plus the operations that turn validation errors
/// into message blocks.
#[derive(Clone)]
pub struct Formatter {
    bullet: String,
    color: Arc<dyn TextStyler>,
    title_color: Arc<dyn TextStyler>,
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter {
            bullet: DEFAULT_BULLET.to_string(),
            color: Arc::new(Identity),
            title_color: Arc::new(Identity),
        }
    }
}

impl std::fmt::Debug for Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Formatter")
            .field("bullet", &self.bullet)
            .finish_non_exhaustive()
    }
}

impl Formatter {
    pub fn new(options: FormatterOptions) -> Self {
        let mut formatter = Formatter::default();
        formatter.configure(options);
        formatter
    }

    pub fn bullet(&self) -> &str {
        &self.bullet
    }

    /// Overwrites the settings present in `options`. An empty bullet counts
    /// as not present.
    pub fn configure(&mut self, options: FormatterOptions) {
        if let Some(bullet) = options.bullet.filter(|bullet| !bullet.is_empty()) {
            trace!(%bullet, "bullet changed");
            self.bullet = bullet;
        }

        if let Some(color) = options.color {
            trace!("message color changed");
            self.color = color;
        }

        if let Some(title_color) = options.title_color {
            trace!("title color changed");
            self.title_color = title_color;
        }
    }

    /// One bulleted line per detail, joined by newlines, with the message
    /// color applied to the whole block.
    ///
    /// When `mention_wrong_value_with` is non-empty every line names the
    /// offending value before the message: `➤ "a" is wrong. Value must be a number`.
    pub fn render_errors(&self, details: &ErrorDetails, mention_wrong_value_with: &str) -> String {
        let lines: Vec<String> = details
            .iter()
            .map(|detail| {
                let mut line = format!("{} ", self.bullet);

                if !mention_wrong_value_with.is_empty() {
                    let value = detail.value.as_deref().unwrap_or(ABSENT_VALUE);
                    line.push_str(&format!("\"{}\" {} ", value, mention_wrong_value_with));
                }

                line.push_str(&detail.message.replace('"', ""));
                line
            })
            .collect();

        self.color.apply(&lines.join("\n"))
    }

    /// Formatted errors of `value` against `schema`, or an empty string if
    /// it is valid.
    pub fn validate<V, S>(&self, value: &V, schema: &S, mention_wrong_value_with: &str) -> String
    where
        V: ?Sized,
        S: Schema<V> + ?Sized,
    {
        match check(value, schema) {
            Ok(()) => String::new(),
            Err(details) => self.render_errors(&details, mention_wrong_value_with),
        }
    }

    pub fn assert_valid<V, S>(
        &self,
        value: &V,
        schema: &S,
        mention_wrong_value_with: &str,
        title: &str,
    ) -> Result<(), ValidationFailed>
    where
        V: ?Sized,
        S: Schema<V> + ?Sized,
    {
        check(value, schema).map_err(|details| {
            ValidationFailed::new(
                self.title_block(title) + &self.render_errors(&details, mention_wrong_value_with),
            )
        })
    }

    /// Fails once with every non-empty block in `results`, typically the
    /// output of several [`Formatter::validate`] calls.
    pub fn combine_checks<I>(&self, title: &str, results: I) -> Result<(), ValidationFailed>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let blocks: Vec<I::Item> = results
            .into_iter()
            .filter(|result| !result.as_ref().is_empty())
            .collect();

        if blocks.is_empty() {
            return Ok(());
        }

        debug!(failed = blocks.len(), "combined checks failed");

        let joined = blocks
            .iter()
            .map(|block| block.as_ref())
            .collect::<Vec<&str>>()
            .join("\n");

        Err(ValidationFailed::new(self.title_block(title) + &joined))
    }

    /// Hands `value` back if it satisfies `schema`.
    pub fn attempt_valid<V, S>(
        &self,
        value: V,
        schema: &S,
        mention_wrong_value_with: &str,
        title: &str,
    ) -> Result<V, ValidationFailed>
    where
        S: Schema<V> + ?Sized,
    {
        self.assert_valid(&value, schema, mention_wrong_value_with, title)?;
        Ok(value)
    }

    fn title_block(&self, title: &str) -> String {
        if title.is_empty() {
            String::new()
        } else {
            self.title_color.apply(title) + "\n"
        }
    }
}

fn check<V, S>(value: &V, schema: &S) -> Result<(), ErrorDetails>
where
    V: ?Sized,
    S: Schema<V> + ?Sized,
{
    schema.check(value).map_err(|details| {
        debug!(errors = details.len(), "validation failed");
        details
    })
}
