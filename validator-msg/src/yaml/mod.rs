//! A small schema engine for [`Yaml`] documents.
//!
//! Schemas are built in code:
//!
//! ```
//! use validator_msg::yaml::{array, valid};
//!
//! let schema = array()
//!     .min(1)
//!     .items(valid(vec!["A", "B", "C"]).label("Values"))
//!     .label("Values");
//! # let _ = schema;
//! ```
//!
//! or loaded from YAML through [`PropertyType::try_from`]. Every failing
//! rule of every nested value is reported, one [`ErrorDetail`] each, with
//! the label quoted in the message: `"Values" must be one of [A, B, C]`.

use std::convert::TryFrom;

use yaml_rust::Yaml;

use crate::details::{ErrorDetail, ErrorDetails};
use crate::Schema;

mod error;
mod options;
mod types;
pub(crate) mod utils;

pub use error::{SchemaError, SchemaErrorKind};
pub use types::{
    SchemaAny, SchemaArray, SchemaBoolean, SchemaNumber, SchemaObject, SchemaString, SchemaValid,
};
pub use utils::YamlUtils;

use error::{add_path_name, optional};
use utils::render_value;

/// Label used for the document itself when the schema has none.
const ROOT_LABEL: &str = "value";

/// Settings shared by every rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    label: Option<String>,
    required: bool,
}

impl<'schema> TryFrom<&'schema Yaml> for Flags {
    type Error = SchemaError<'schema>;
    fn try_from(yaml: &'schema Yaml) -> Result<Self, Self::Error> {
        let label = yaml
            .lookup("label", "string", Yaml::as_str)
            .map_err(add_path_name("label"))
            .map(Option::from)
            .or_else(optional(None))?
            .map(String::from);

        let required = yaml
            .lookup("required", "bool", Yaml::as_bool)
            .map_err(add_path_name("required"))
            .map(Option::from)
            .or_else(optional(None))?
            .unwrap_or(false);

        Ok(Flags { label, required })
    }
}

pub(crate) trait Validate {
    fn flags(&self) -> &Flags;

    /// Checks a value known to be present, `label` already resolved.
    fn validate_present(&self, yaml: &Yaml, label: &str) -> Result<(), Vec<ErrorDetail>>;

    fn validate(&self, yaml: &Yaml, fallback_label: &str) -> Result<(), Vec<ErrorDetail>> {
        let flags = self.flags();
        let label = flags.label.as_deref().unwrap_or(fallback_label);

        match yaml {
            Yaml::BadValue if flags.required => Err(vec![ErrorDetail::new(
                format!("\"{}\" is required", label),
                None,
            )]),
            Yaml::BadValue => Ok(()),
            present => self.validate_present(present, label),
        }
    }
}

/// Any of the supported rules, used wherever schemas nest.
#[derive(Debug, Clone)]
pub enum PropertyType {
    Any(SchemaAny),
    Boolean(SchemaBoolean),
    Number(SchemaNumber),
    String(SchemaString),
    Array(SchemaArray),
    Object(SchemaObject),
    Valid(SchemaValid),
}

impl Validate for PropertyType {
    fn flags(&self) -> &Flags {
        match self {
            PropertyType::Any(p) => p.flags(),
            PropertyType::Boolean(p) => p.flags(),
            PropertyType::Number(p) => p.flags(),
            PropertyType::String(p) => p.flags(),
            PropertyType::Array(p) => p.flags(),
            PropertyType::Object(p) => p.flags(),
            PropertyType::Valid(p) => p.flags(),
        }
    }

    fn validate_present(&self, yaml: &Yaml, label: &str) -> Result<(), Vec<ErrorDetail>> {
        match self {
            PropertyType::Any(p) => p.validate_present(yaml, label),
            PropertyType::Boolean(p) => p.validate_present(yaml, label),
            PropertyType::Number(p) => p.validate_present(yaml, label),
            PropertyType::String(p) => p.validate_present(yaml, label),
            PropertyType::Array(p) => p.validate_present(yaml, label),
            PropertyType::Object(p) => p.validate_present(yaml, label),
            PropertyType::Valid(p) => p.validate_present(yaml, label),
        }
    }
}

impl Schema<Yaml> for PropertyType {
    fn check(&self, yaml: &Yaml) -> Result<(), ErrorDetails> {
        self.validate(yaml, ROOT_LABEL).map_err(ErrorDetails::from)
    }
}

impl<'schema> TryFrom<&'schema Yaml> for PropertyType {
    type Error = SchemaError<'schema>;
    fn try_from(yaml: &'schema Yaml) -> Result<Self, Self::Error> {
        let typename = yaml.lookup("type", "string", Yaml::as_str)?;

        match typename {
            "any" => Ok(PropertyType::Any(SchemaAny::try_from(yaml)?)),
            "boolean" => Ok(PropertyType::Boolean(SchemaBoolean::try_from(yaml)?)),
            "number" => Ok(PropertyType::Number(SchemaNumber::try_from(yaml)?)),
            "string" => Ok(PropertyType::String(SchemaString::try_from(yaml)?)),
            "array" => Ok(PropertyType::Array(SchemaArray::try_from(yaml)?)),
            "object" => Ok(PropertyType::Object(SchemaObject::try_from(yaml)?)),
            "valid" => Ok(PropertyType::Valid(SchemaValid::try_from(yaml)?)),
            unknown_type => Err(SchemaErrorKind::UnknownType { unknown_type }.into()),
        }
    }
}

/// Generates the `label`/`required` builders, the conversion into
/// [`PropertyType`] and the [`Schema`] impl for a rule.
macro_rules! schema_rule {
    ($($rule:ident => $variant:ident),* $(,)?) => {
        $(
            impl $rule {
                pub fn label<L: Into<String>>(mut self, label: L) -> Self {
                    self.flags.label = Some(label.into());
                    self
                }

                pub fn required(mut self) -> Self {
                    self.flags.required = true;
                    self
                }
            }

            impl From<$rule> for PropertyType {
                fn from(rule: $rule) -> Self {
                    PropertyType::$variant(rule)
                }
            }

            impl Schema<Yaml> for $rule {
                fn check(&self, yaml: &Yaml) -> Result<(), ErrorDetails> {
                    self.validate(yaml, ROOT_LABEL).map_err(ErrorDetails::from)
                }
            }
        )*
    };
}

schema_rule! {
    SchemaAny => Any,
    SchemaBoolean => Boolean,
    SchemaNumber => Number,
    SchemaString => String,
    SchemaArray => Array,
    SchemaObject => Object,
    SchemaValid => Valid,
}

/// Conversion of plain Rust values into allowed values for [`valid`].
pub trait IntoYaml {
    fn into_yaml(self) -> Yaml;
}

impl IntoYaml for Yaml {
    fn into_yaml(self) -> Yaml {
        self
    }
}

impl IntoYaml for &str {
    fn into_yaml(self) -> Yaml {
        Yaml::String(self.to_string())
    }
}

impl IntoYaml for String {
    fn into_yaml(self) -> Yaml {
        Yaml::String(self)
    }
}

impl IntoYaml for i64 {
    fn into_yaml(self) -> Yaml {
        Yaml::Integer(self)
    }
}

impl IntoYaml for i32 {
    fn into_yaml(self) -> Yaml {
        Yaml::Integer(i64::from(self))
    }
}

impl IntoYaml for bool {
    fn into_yaml(self) -> Yaml {
        Yaml::Boolean(self)
    }
}

pub fn any() -> SchemaAny {
    SchemaAny::default()
}

pub fn boolean() -> SchemaBoolean {
    SchemaBoolean::default()
}

pub fn number() -> SchemaNumber {
    SchemaNumber::default()
}

pub fn string() -> SchemaString {
    SchemaString::default()
}

pub fn array() -> SchemaArray {
    SchemaArray::default()
}

pub fn object() -> SchemaObject {
    SchemaObject::default()
}

/// Accepts only the listed values.
pub fn valid<I>(values: I) -> SchemaValid
where
    I: IntoIterator,
    I::Item: IntoYaml,
{
    SchemaValid::new(values.into_iter().map(IntoYaml::into_yaml).collect())
}

fn failure(message: String, yaml: &Yaml) -> ErrorDetail {
    ErrorDetail::new(message, render_value(yaml))
}

fn collected(errors: Vec<ErrorDetail>) -> Result<(), Vec<ErrorDetail>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yaml::utils::load_simple;

    #[test]
    fn missing_required_value() {
        let details = number().required().label("Value").check(&Yaml::BadValue).unwrap_err();
        let details: Vec<ErrorDetail> = details.into_iter().collect();

        assert_eq!(
            details,
            vec![ErrorDetail::new("\"Value\" is required", None)]
        );
    }

    #[test]
    fn missing_optional_value() {
        number().check(&Yaml::BadValue).unwrap();
    }

    #[test]
    fn null_is_a_value() {
        let details = number().check(&load_simple("~")).unwrap_err();
        let details: Vec<ErrorDetail> = details.into_iter().collect();

        assert_eq!(
            details,
            vec![ErrorDetail::new("\"value\" must be a number", Some("null".into()))]
        );
    }

    #[test]
    fn from_yaml_unknown_type() {
        assert_eq!(
            PropertyType::try_from(&load_simple("type: date")).unwrap_err(),
            SchemaErrorKind::UnknownType {
                unknown_type: "date"
            }
            .into()
        );
    }

    #[test]
    fn from_yaml_missing_type() {
        assert_eq!(
            PropertyType::try_from(&load_simple("label: Value")).unwrap_err(),
            SchemaErrorKind::FieldMissing { field: "type" }.into()
        );
    }

    #[test]
    fn from_yaml_bad_flags() {
        assert_eq!(
            PropertyType::try_from(&load_simple(
                r#"
                type: number
                required: yes please
                "#
            ))
            .unwrap_err(),
            SchemaErrorKind::WrongType {
                expected: "bool",
                actual: "string"
            }
            .with_path_name("required")
        );
    }
}
