//! Text stylers applied to rendered messages and titles.
//!
//! A styler is anything that turns a string into another string, usually by
//! wrapping it in terminal escape codes. Closures work directly:
//!
//! ```
//! use validator_msg::style::TextStyler;
//!
//! let shout = |s: &str| s.to_uppercase();
//! assert_eq!(shout.apply("hello"), "HELLO");
//! ```

#[cfg(feature = "color")]
use thiserror::Error;

pub trait TextStyler: Send + Sync {
    fn apply(&self, text: &str) -> String;
}

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl TextStyler for Identity {
    fn apply(&self, text: &str) -> String {
        text.to_string()
    }
}

impl<F> TextStyler for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn apply(&self, text: &str) -> String {
        self(text)
    }
}

#[cfg(feature = "color")]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StyleError {
    #[error("unknown style '{name}'")]
    UnknownStyle { name: String },
    #[error("no style specified")]
    Empty,
}

/// Terminal styling backed by `owo-colors`.
///
/// Parsed from a list of style names separated by spaces or `+`, for
/// example `"blue"`, `"red bold"` or `"purple+underline"`.
#[cfg(feature = "color")]
#[derive(Debug, Clone, Copy)]
pub struct Paint(owo_colors::Style);

#[cfg(feature = "color")]
impl Paint {
    pub fn new(style: owo_colors::Style) -> Self {
        Paint(style)
    }
}

#[cfg(feature = "color")]
impl TextStyler for Paint {
    fn apply(&self, text: &str) -> String {
        use owo_colors::OwoColorize;

        text.style(self.0).to_string()
    }
}

#[cfg(feature = "color")]
impl std::str::FromStr for Paint {
    type Err = StyleError;

    fn from_str(names: &str) -> Result<Self, Self::Err> {
        let mut tokens = names
            .split(|c: char| c == '+' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .peekable();

        if tokens.peek().is_none() {
            return Err(StyleError::Empty);
        }

        let style = tokens.try_fold(owo_colors::Style::new(), |style, token| {
            Ok(match token.to_ascii_lowercase().as_str() {
                "black" => style.black(),
                "red" => style.red(),
                "green" => style.green(),
                "yellow" => style.yellow(),
                "blue" => style.blue(),
                "magenta" => style.magenta(),
                "purple" => style.purple(),
                "cyan" => style.cyan(),
                "white" => style.white(),
                "bold" => style.bold(),
                "dimmed" | "dim" => style.dimmed(),
                "italic" => style.italic(),
                "underline" => style.underline(),
                _ => {
                    return Err(StyleError::UnknownStyle {
                        name: token.to_string(),
                    })
                }
            })
        })?;

        Ok(Paint(style))
    }
}
