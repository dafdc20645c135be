use std::convert::TryInto;
use std::ops::Index;

use yaml_rust::{yaml::Hash, Yaml};

use super::error::{condense_errors, SchemaError, SchemaErrorKind};

pub fn try_into_usize<'a, N: Default + PartialOrd + TryInto<usize>>(
    number: N,
) -> Result<usize, SchemaError<'a>> {
    if number < N::default() {
        return Err(SchemaErrorKind::MalformedField {
            error: "must be a non-negative integer value".into(),
        }
        .into());
    }

    N::try_into(number).map_err(|_| {
        SchemaErrorKind::MalformedField {
            error: "value does not fit in a usize on this system".into(),
        }
        .into()
    })
}

#[cfg(test)]
pub(crate) fn load_simple(source: &'static str) -> Yaml {
    yaml_rust::YamlLoader::load_from_str(source)
        .unwrap()
        .remove(0)
}

/// Integers and reals alike, as a float.
pub(crate) fn as_number(yaml: &Yaml) -> Option<f64> {
    match yaml {
        Yaml::Integer(i) => Some(*i as f64),
        Yaml::Real(_) => yaml.as_f64(),
        _ => None,
    }
}

/// Text form of a value as it appears in messages. `None` for a missing value.
pub(crate) fn render_value(yaml: &Yaml) -> Option<String> {
    match yaml {
        Yaml::BadValue => None,
        other => Some(render(other)),
    }
}

fn render(yaml: &Yaml) -> String {
    match yaml {
        Yaml::String(s) => s.clone(),
        Yaml::Real(r) => r.clone(),
        Yaml::Integer(i) => i.to_string(),
        Yaml::Boolean(b) => b.to_string(),
        Yaml::Null => "null".to_string(),
        Yaml::Array(items) => format!(
            "[{}]",
            items.iter().map(render).collect::<Vec<_>>().join(", ")
        ),
        Yaml::Hash(hash) => format!(
            "{{{}}}",
            hash.iter()
                .map(|(key, value)| format!("{}: {}", render(key), render(value)))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        other => other.type_to_str().to_string(),
    }
}

pub trait YamlUtils {
    fn type_to_str(&self) -> &'static str;

    fn as_type<'a, F, T>(&'a self, expected: &'static str, cast: F) -> Result<T, SchemaError<'a>>
    where
        F: FnOnce(&'a Yaml) -> Option<T>;

    fn lookup<'a, F, T>(
        &'a self,
        field: &'a str,
        expected: &'static str,
        cast: F,
    ) -> Result<T, SchemaError<'a>>
    where
        F: FnOnce(&'a Yaml) -> Option<T>;

    fn strict_contents<'schema>(
        &'schema self,
        required: &[&'schema str],
        optional: &[&'schema str],
    ) -> Result<&Hash, SchemaError<'schema>>;
}

impl YamlUtils for Yaml {
    fn type_to_str(&self) -> &'static str {
        match self {
            Yaml::Real(_) => "real",
            Yaml::Integer(_) => "integer",
            Yaml::String(_) => "string",
            Yaml::Boolean(_) => "boolean",
            Yaml::Array(_) => "array",
            Yaml::Hash(_) => "hash",
            Yaml::Alias(_) => "alias",
            Yaml::Null => "null",
            Yaml::BadValue => "bad_value",
        }
    }

    fn as_type<'a, F, T>(&'a self, expected: &'static str, cast: F) -> Result<T, SchemaError<'a>>
    where
        F: FnOnce(&'a Yaml) -> Option<T>,
    {
        cast(self).ok_or_else(|| {
            SchemaErrorKind::WrongType {
                expected,
                actual: self.type_to_str(),
            }
            .into()
        })
    }

    fn lookup<'a, F, T>(
        &'a self,
        field: &'a str,
        expected: &'static str,
        cast: F,
    ) -> Result<T, SchemaError<'a>>
    where
        F: FnOnce(&'a Yaml) -> Option<T>,
    {
        let value = self.index(field);
        match value {
            Yaml::BadValue => Err(SchemaErrorKind::FieldMissing { field }.into()),
            Yaml::Null => Err(SchemaErrorKind::FieldMissing { field }.into()),
            content => content.as_type(expected, cast),
        }
    }

    fn strict_contents<'schema>(
        &'schema self,
        required: &[&'schema str],
        optional: &[&'schema str],
    ) -> Result<&Hash, SchemaError<'schema>> {
        let hash = self.as_type("hash", Yaml::as_hash)?;

        let missing = required
            .iter()
            .filter(|field| !hash.contains_key(&Yaml::String((**field).to_string())))
            .map(|field| Err(SchemaErrorKind::FieldMissing { field: *field }.into()));

        let extra = hash
            .keys()
            .map(|field| field.as_type("string", Yaml::as_str))
            .filter(|field| match field {
                Ok(field) => !required.contains(field) && !optional.contains(field),
                Err(_) => true,
            })
            .map(|field| field.and_then(|field| Err(SchemaErrorKind::ExtraField { field }.into())));

        condense_errors(missing.chain(extra)).map(|_: Vec<()>| hash)
    }
}
