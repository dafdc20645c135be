use crate::details::ErrorDetail;
use crate::yaml::error::{add_path_name, condense_errors, optional, SchemaError};
use crate::yaml::utils::{render_value, YamlUtils};
use crate::yaml::{collected, failure, Flags, PropertyType, Validate};
use std::convert::TryFrom;
use yaml_rust::Yaml;

/// A mapping with known keys. Keys not listed are rejected unless
/// `unknown(true)` is set.
#[derive(Debug, Clone, Default)]
pub struct SchemaObject {
    pub(crate) flags: Flags,
    keys: Vec<(String, PropertyType)>,
    unknown: bool,
}

impl SchemaObject {
    pub fn key<N: Into<String>, P: Into<PropertyType>>(mut self, name: N, schema: P) -> Self {
        self.keys.push((name.into(), schema.into()));
        self
    }

    pub fn unknown(mut self, allow: bool) -> Self {
        self.unknown = allow;
        self
    }

    fn is_known(&self, key: &Yaml) -> bool {
        key.as_str()
            .map_or(false, |key| self.keys.iter().any(|(name, _)| name == key))
    }
}

impl<'schema> TryFrom<&'schema Yaml> for SchemaObject {
    type Error = SchemaError<'schema>;
    fn try_from(yaml: &'schema Yaml) -> Result<Self, Self::Error> {
        yaml.strict_contents(&["type"], &["label", "required", "keys", "unknown"])?;

        let flags = Flags::try_from(yaml)?;

        let unknown = yaml
            .lookup("unknown", "bool", Yaml::as_bool)
            .map_err(add_path_name("unknown"))
            .map(Option::from)
            .or_else(optional(None))?
            .unwrap_or(false);

        let keys = yaml
            .lookup("keys", "hash", Yaml::as_hash)
            .map(Option::from)
            .or_else(optional(None))
            .map_err(add_path_name("keys"))?
            .map(|keys| {
                condense_errors(keys.iter().map(
                    |(name, schema)| -> Result<(String, PropertyType), SchemaError<'schema>> {
                        let name = name.as_type("string", Yaml::as_str)?;
                        PropertyType::try_from(schema)
                            .map(|schema| (name.to_string(), schema))
                            .map_err(add_path_name(name))
                    },
                ))
                .map_err(add_path_name("keys"))
            })
            .transpose()?
            .unwrap_or_default();

        Ok(SchemaObject {
            flags,
            keys,
            unknown,
        })
    }
}

impl Validate for SchemaObject {
    fn flags(&self) -> &Flags {
        &self.flags
    }

    fn validate_present(&self, yaml: &Yaml, label: &str) -> Result<(), Vec<ErrorDetail>> {
        let hash = yaml.as_hash().ok_or_else(|| {
            vec![failure(
                format!("\"{}\" must be of type object", label),
                yaml,
            )]
        })?;

        let mut errors = Vec::new();
        let missing = Yaml::BadValue;

        for (name, schema) in &self.keys {
            let value = hash.get(&Yaml::String(name.clone())).unwrap_or(&missing);

            if let Err(details) = schema.validate(value, name) {
                errors.extend(details.into_iter().map(ErrorDetail::add_path_name(name)));
            }
        }

        if !self.unknown {
            for (key, value) in hash.iter().filter(|(key, _)| !self.is_known(key)) {
                let key = render_value(key).unwrap_or_default();
                let detail = failure(format!("\"{}\" is not allowed", key), value);

                errors.push(ErrorDetail::add_path_name(&key)(detail));
            }
        }

        collected(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yaml::utils::load_simple;
    use crate::yaml::{number, object, string, SchemaErrorKind};
    use crate::Schema;

    fn point() -> SchemaObject {
        object()
            .key("x", number().required().label("X coordinate"))
            .key("y", number().required().label("Y coordinate"))
            .key("name", string())
    }

    fn details(schema: &SchemaObject, source: &'static str) -> Vec<ErrorDetail> {
        schema
            .check(&load_simple(source))
            .unwrap_err()
            .into_iter()
            .collect()
    }

    #[test]
    fn from_yaml() {
        SchemaObject::try_from(&load_simple(
            r#"
            type: object
            keys:
              x:
                type: number
                required: true
              name:
                type: string
            "#,
        ))
        .unwrap();
    }

    #[test]
    fn from_yaml_nested_errors() {
        let yaml = load_simple(
            r#"
            type: object
            keys:
              x:
                label: X
              y:
                type: number
                extra: field
            "#,
        );

        let err = SchemaObject::try_from(&yaml).unwrap_err();

        assert_eq!(
            format!("{}", err),
            "#.keys.x: field 'type' missing\n#.keys.y: field 'extra' is not specified in the schema\n"
        );
        assert!(matches!(err.kind, SchemaErrorKind::Multiple { .. }));
    }

    #[test]
    fn validate_valid() {
        point()
            .check(&load_simple(
                r#"
                x: 1
                y: 2.5
                "#,
            ))
            .unwrap();
    }

    #[test]
    fn validate_every_key() {
        let details = details(
            &point(),
            r#"
            x: a
            name: 10
            "#,
        );

        let messages: Vec<&str> = details.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "\"X coordinate\" must be a number",
                "\"Y coordinate\" is required",
                "\"name\" must be a string"
            ]
        );
        assert_eq!(details[1].value, None);
        assert_eq!(format!("{}", details[2].path), ".name");
    }

    #[test]
    fn validate_unknown_keys() {
        let details = details(
            &point(),
            r#"
            x: 1
            y: 2
            z: 3
            "#,
        );

        assert_eq!(
            details,
            vec![ErrorDetail::add_path_name("z")(ErrorDetail::new(
                "\"z\" is not allowed",
                Some("3".into())
            ))]
        );

        point()
            .unknown(true)
            .check(&load_simple("{x: 1, y: 2, z: 3}"))
            .unwrap();
    }

    #[test]
    fn validate_not_a_hash() {
        assert_eq!(
            details(&point().label("Point"), "[1, 2]"),
            vec![ErrorDetail::new(
                "\"Point\" must be of type object",
                Some("[1, 2]".into())
            )]
        );
    }
}
