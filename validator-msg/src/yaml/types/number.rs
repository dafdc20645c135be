use crate::details::ErrorDetail;
use crate::yaml::error::{add_path_name, optional, SchemaError, SchemaErrorKind};
use crate::yaml::utils::{as_number, YamlUtils};
use crate::yaml::{collected, failure, Flags, Validate};
use std::convert::TryFrom;
use yaml_rust::Yaml;

/// Integers and reals, optionally restricted to whole numbers and bounds.
#[derive(Debug, Clone, Default)]
pub struct SchemaNumber {
    pub(crate) flags: Flags,
    integer: bool,
    min: Option<f64>,
    max: Option<f64>,
}

impl SchemaNumber {
    pub fn integer(mut self) -> Self {
        self.integer = true;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

impl<'schema> TryFrom<&'schema Yaml> for SchemaNumber {
    type Error = SchemaError<'schema>;
    fn try_from(yaml: &'schema Yaml) -> Result<Self, Self::Error> {
        yaml.strict_contents(&["type"], &["label", "required", "integer", "min", "max"])?;

        let flags = Flags::try_from(yaml)?;

        let integer = yaml
            .lookup("integer", "bool", Yaml::as_bool)
            .map_err(add_path_name("integer"))
            .map(Option::from)
            .or_else(optional(None))?
            .unwrap_or(false);

        let min = yaml
            .lookup("min", "number", as_number)
            .map_err(add_path_name("min"))
            .map(Option::from)
            .or_else(optional(None))?;

        let max = yaml
            .lookup("max", "number", as_number)
            .map_err(add_path_name("max"))
            .map(Option::from)
            .or_else(optional(None))?;

        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(SchemaErrorKind::MalformedField {
                    error: "min cannot be greater than max".into(),
                }
                .into());
            }
        }

        Ok(SchemaNumber {
            flags,
            integer,
            min,
            max,
        })
    }
}

impl Validate for SchemaNumber {
    fn flags(&self) -> &Flags {
        &self.flags
    }

    fn validate_present(&self, yaml: &Yaml, label: &str) -> Result<(), Vec<ErrorDetail>> {
        let number = as_number(yaml)
            .ok_or_else(|| vec![failure(format!("\"{}\" must be a number", label), yaml)])?;

        let mut errors = Vec::new();

        if self.integer && number.fract() != 0.0 {
            errors.push(failure(format!("\"{}\" must be an integer", label), yaml));
        }

        if let Some(min) = self.min {
            if number < min {
                errors.push(failure(
                    format!("\"{}\" must be greater than or equal to {}", label, min),
                    yaml,
                ));
            }
        }

        if let Some(max) = self.max {
            if number > max {
                errors.push(failure(
                    format!("\"{}\" must be less than or equal to {}", label, max),
                    yaml,
                ));
            }
        }

        collected(errors)
    }
}
