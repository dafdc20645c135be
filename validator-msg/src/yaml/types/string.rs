use crate::details::ErrorDetail;
use crate::yaml::error::{add_path_name, optional, SchemaError, SchemaErrorKind};
use crate::yaml::utils::{try_into_usize, YamlUtils};
use crate::yaml::{collected, failure, Flags, Validate};
use std::convert::TryFrom;
use yaml_rust::Yaml;

#[derive(Debug, Clone, Default)]
pub struct SchemaString {
    pub(crate) flags: Flags,
    // Lengths count characters, not bytes.
    min_length: Option<usize>,
    max_length: Option<usize>,

    #[cfg(feature = "regex")]
    pattern: Option<regex::Regex>,
}

impl SchemaString {
    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    #[cfg(feature = "regex")]
    pub fn pattern(mut self, pattern: regex::Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }
}

impl<'schema> TryFrom<&'schema Yaml> for SchemaString {
    type Error = SchemaError<'schema>;
    fn try_from(yaml: &'schema Yaml) -> Result<Self, Self::Error> {
        #[cfg(feature = "regex")]
        yaml.strict_contents(
            &["type"],
            &["label", "required", "minLength", "maxLength", "pattern"],
        )?;

        #[cfg(not(feature = "regex"))]
        yaml.strict_contents(&["type"], &["label", "required", "minLength", "maxLength"])?;

        let flags = Flags::try_from(yaml)?;

        let min_length = yaml
            .lookup("minLength", "integer", Yaml::as_i64)
            .and_then(try_into_usize)
            .map_err(add_path_name("minLength"))
            .map(Option::from)
            .or_else(optional(None))?;

        let max_length = yaml
            .lookup("maxLength", "integer", Yaml::as_i64)
            .and_then(try_into_usize)
            .map_err(add_path_name("maxLength"))
            .map(Option::from)
            .or_else(optional(None))?;

        if let (Some(min_length), Some(max_length)) = (min_length, max_length) {
            if min_length > max_length {
                return Err(SchemaErrorKind::MalformedField {
                    error: "minLength cannot be greater than maxLength".into(),
                }
                .into());
            }
        }

        #[cfg(feature = "regex")]
        {
            let pattern = yaml
                .lookup("pattern", "string", Yaml::as_str)
                .map(Option::from)
                .or_else(optional(None))?
                .map(|inner| {
                    regex::Regex::new(inner).map_err(|e| {
                        SchemaErrorKind::MalformedField {
                            error: format!("{}", e),
                        }
                        .with_path_name("pattern")
                    })
                })
                .transpose()?;

            Ok(SchemaString {
                flags,
                min_length,
                max_length,
                pattern,
            })
        }

        #[cfg(not(feature = "regex"))]
        Ok(SchemaString {
            flags,
            min_length,
            max_length,
        })
    }
}

impl Validate for SchemaString {
    fn flags(&self) -> &Flags {
        &self.flags
    }

    fn validate_present(&self, yaml: &Yaml, label: &str) -> Result<(), Vec<ErrorDetail>> {
        let value = yaml
            .as_str()
            .ok_or_else(|| vec![failure(format!("\"{}\" must be a string", label), yaml)])?;

        let mut errors = Vec::new();
        let length = value.chars().count();

        if let Some(min_length) = self.min_length {
            if length < min_length {
                errors.push(failure(
                    format!(
                        "\"{}\" length must be at least {} characters long",
                        label, min_length
                    ),
                    yaml,
                ));
            }
        }

        if let Some(max_length) = self.max_length {
            if length > max_length {
                errors.push(failure(
                    format!(
                        "\"{}\" length must be less than or equal to {} characters long",
                        label, max_length
                    ),
                    yaml,
                ));
            }
        }

        #[cfg(feature = "regex")]
        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(value) {
                errors.push(failure(
                    format!(
                        "\"{}\" with value \"{}\" fails to match the required pattern: {}",
                        label,
                        value,
                        pattern.as_str()
                    ),
                    yaml,
                ));
            }
        }

        collected(errors)
    }
}
