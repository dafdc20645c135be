use thiserror::Error;

use crate::breadcrumb::{Breadcrumb, BreadcrumbSegment};

/// Problems found while building a schema from YAML.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SchemaErrorKind<'a> {
    #[error("wrong type, expected {expected} got {actual}")]
    WrongType {
        expected: &'static str,
        actual: &'static str,
    },
    #[error("malformed field: {error}")]
    MalformedField { error: String },
    #[error("field '{field}' missing")]
    FieldMissing { field: &'a str },
    #[error("field '{field}' is not specified in the schema")]
    ExtraField { field: &'a str },
    #[error("unknown type specified: {unknown_type}")]
    UnknownType { unknown_type: &'a str },
    #[error("multiple errors were encountered: {errors:?}")]
    Multiple { errors: Vec<SchemaError<'a>> },
}

/// A wrapper type around SchemaErrorKind containing path information about where the error occurred.
#[derive(Debug, PartialEq, Eq)]
pub struct SchemaError<'a> {
    pub kind: SchemaErrorKind<'a>,
    pub state: Breadcrumb,
}

impl<'a> SchemaError<'a> {
    fn flatten(&self, fmt: &mut std::fmt::Formatter<'_>, root: String) -> std::fmt::Result {
        match &self.kind {
            SchemaErrorKind::Multiple { errors } => {
                for err in errors {
                    err.flatten(fmt, format!("{}{}", root, self.state))?;
                }
            }
            err => writeln!(fmt, "{}{}: {}", root, self.state, err)?,
        }

        Ok(())
    }
}

impl<'a> std::fmt::Display for SchemaError<'a> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.flatten(fmt, "#".to_string())
    }
}

impl<'a> std::error::Error for SchemaError<'a> {}

impl<'a> SchemaErrorKind<'a> {
    pub fn with_path_name(self, path: &str) -> SchemaError<'a> {
        let mut err: SchemaError = self.into();
        err.state.push(BreadcrumbSegment::from(path));
        err
    }
}

impl<'a> From<SchemaErrorKind<'a>> for SchemaError<'a> {
    fn from(kind: SchemaErrorKind<'a>) -> SchemaError<'a> {
        SchemaError {
            kind,
            state: Breadcrumb::default(),
        }
    }
}

pub fn add_path_name<'a>(path: &str) -> impl Fn(SchemaError<'a>) -> SchemaError<'a> {
    let path = path.to_string();
    move |mut err: SchemaError<'a>| -> SchemaError<'a> {
        err.state.push(BreadcrumbSegment::Name(path.clone()));
        err
    }
}

/// Turns a missing field into `default`, passing every other error through.
pub fn optional<'a, T>(default: T) -> impl FnOnce(SchemaError<'a>) -> Result<T, SchemaError<'a>> {
    move |err: SchemaError<'a>| -> Result<T, SchemaError<'a>> {
        match err.kind {
            SchemaErrorKind::FieldMissing { .. } => Ok(default),
            _ => Err(err),
        }
    }
}

/// Keeps every error of `iter`, folding more than one into `Multiple`.
pub fn condense_errors<'a, T, I>(iter: I) -> Result<Vec<T>, SchemaError<'a>>
where
    I: Iterator<Item = Result<T, SchemaError<'a>>>,
{
    let (values, mut errors): (Vec<T>, Vec<SchemaError<'a>>) =
        iter.fold((Vec::new(), Vec::new()), |(mut values, mut errors), result| {
            match result {
                Ok(value) => values.push(value),
                Err(err) => errors.push(err),
            }
            (values, errors)
        });

    match errors.len() {
        0 => Ok(values),
        1 => Err(errors.remove(0)),
        _ => Err(SchemaErrorKind::Multiple { errors }.into()),
    }
}
