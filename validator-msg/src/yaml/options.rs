use std::convert::TryFrom;

use yaml_rust::Yaml;

use super::error::{add_path_name, optional, SchemaError, SchemaErrorKind};
use super::utils::YamlUtils;
use crate::formatter::FormatterOptions;

/// Reads `bullet`, `color` and `titleColor` from a mapping. Colors are
/// style names understood by [`crate::style::Paint`].
impl<'a> TryFrom<&'a Yaml> for FormatterOptions {
    type Error = SchemaError<'a>;
    fn try_from(yaml: &'a Yaml) -> Result<Self, Self::Error> {
        yaml.strict_contents(&[], &["bullet", "color", "titleColor"])?;

        let bullet = yaml
            .lookup("bullet", "string", Yaml::as_str)
            .map_err(add_path_name("bullet"))
            .map(Option::from)
            .or_else(optional(None))?;

        let mut options = FormatterOptions::new();

        if let Some(bullet) = bullet {
            options = options.bullet(bullet);
        }

        if let Some(color) = styler(yaml, "color")? {
            options = options.color(color);
        }

        if let Some(title_color) = styler(yaml, "titleColor")? {
            options = options.title_color(title_color);
        }

        Ok(options)
    }
}

#[cfg(feature = "color")]
fn styler<'a>(
    yaml: &'a Yaml,
    field: &'a str,
) -> Result<Option<crate::style::Paint>, SchemaError<'a>> {
    yaml.lookup(field, "string", Yaml::as_str)
        .map_err(add_path_name(field))
        .map(Option::from)
        .or_else(optional(None))?
        .map(|names| {
            names.parse().map_err(|e: crate::style::StyleError| {
                SchemaErrorKind::MalformedField {
                    error: format!("{}", e),
                }
                .with_path_name(field)
            })
        })
        .transpose()
}

#[cfg(not(feature = "color"))]
fn styler<'a>(yaml: &'a Yaml, field: &'a str) -> Result<Option<crate::style::Identity>, SchemaError<'a>> {
    match yaml.lookup(field, "string", Yaml::as_str) {
        Ok(_) => Err(SchemaErrorKind::MalformedField {
            error: "colors require the 'color' feature".into(),
        }
        .with_path_name(field)),
        Err(err) => Err(err).or_else(optional(None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::details::{ErrorDetail, ErrorDetails};
    use crate::formatter::Formatter;
    use crate::yaml::utils::load_simple;

    #[test]
    fn bullet_only() {
        let options = FormatterOptions::try_from(&load_simple("bullet: '-'")).unwrap();
        let formatter = Formatter::new(options);

        assert_eq!(
            formatter.render_errors(
                &ErrorDetails::from(ErrorDetail::new("\"Value\" must be a number", None)),
                ""
            ),
            "- Value must be a number"
        );
    }

    #[test]
    fn extra_field() {
        assert_eq!(
            FormatterOptions::try_from(&load_simple("glyph: '*'")).unwrap_err(),
            SchemaErrorKind::ExtraField { field: "glyph" }.into()
        );
    }

    #[cfg(feature = "color")]
    #[test]
    fn named_colors() {
        use owo_colors::{OwoColorize, Style};

        let options = FormatterOptions::try_from(&load_simple(
            r#"
            bullet: '*'
            color: blue
            titleColor: purple bold
            "#,
        ))
        .unwrap();

        let formatter = Formatter::new(options);
        let err = formatter.combine_checks("Title", vec!["* block"]).unwrap_err();

        assert_eq!(
            err.message(),
            format!("{}\n* block", "Title".style(Style::new().purple().bold()))
        );
        assert_eq!(
            formatter.render_errors(&ErrorDetails::from(ErrorDetail::new("x", None)), ""),
            "* x".style(Style::new().blue()).to_string()
        );
    }

    #[cfg(feature = "color")]
    #[test]
    fn unknown_color() {
        assert_eq!(
            FormatterOptions::try_from(&load_simple("color: chartreuse")).unwrap_err(),
            SchemaErrorKind::MalformedField {
                error: "unknown style 'chartreuse'".into()
            }
            .with_path_name("color")
        );
    }
}
