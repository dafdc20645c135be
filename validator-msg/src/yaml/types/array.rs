use crate::details::ErrorDetail;
use crate::yaml::error::{add_path_name, optional, SchemaError, SchemaErrorKind};
use crate::yaml::utils::{try_into_usize, YamlUtils};
use crate::yaml::{collected, failure, Flags, PropertyType, Validate};
use std::convert::TryFrom;
use yaml_rust::Yaml;

#[derive(Debug, Clone, Default)]
pub struct SchemaArray {
    pub(crate) flags: Flags,
    items: Option<Box<PropertyType>>,
    min_items: Option<usize>,
    max_items: Option<usize>,
}

impl SchemaArray {
    /// Schema every item has to satisfy.
    pub fn items<P: Into<PropertyType>>(mut self, items: P) -> Self {
        self.items = Some(Box::new(items.into()));
        self
    }

    pub fn min(mut self, min_items: usize) -> Self {
        self.min_items = Some(min_items);
        self
    }

    pub fn max(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }
}

impl<'schema> TryFrom<&'schema Yaml> for SchemaArray {
    type Error = SchemaError<'schema>;
    fn try_from(yaml: &'schema Yaml) -> Result<Self, Self::Error> {
        yaml.strict_contents(
            &["type"],
            &["label", "required", "items", "minItems", "maxItems"],
        )?;

        let flags = Flags::try_from(yaml)?;

        let min_items = yaml
            .lookup("minItems", "integer", Yaml::as_i64)
            .and_then(try_into_usize)
            .map_err(add_path_name("minItems"))
            .map(Option::from)
            .or_else(optional(None))?;

        let max_items = yaml
            .lookup("maxItems", "integer", Yaml::as_i64)
            .and_then(try_into_usize)
            .map_err(add_path_name("maxItems"))
            .map(Option::from)
            .or_else(optional(None))?;

        if let (Some(min_items), Some(max_items)) = (min_items, max_items) {
            if min_items > max_items {
                return Err(SchemaErrorKind::MalformedField {
                    error: "minItems cannot be greater than maxItems".into(),
                }
                .into());
            }
        }

        let items = yaml
            .lookup("items", "yaml", Option::from)
            .map_err(add_path_name("items"))
            .map(Option::from)
            .or_else(optional(None))?
            .map(PropertyType::try_from)
            .transpose()
            .map_err(add_path_name("items"))?
            .map(Box::new);

        Ok(SchemaArray {
            flags,
            items,
            min_items,
            max_items,
        })
    }
}

impl Validate for SchemaArray {
    fn flags(&self) -> &Flags {
        &self.flags
    }

    fn validate_present(&self, yaml: &Yaml, label: &str) -> Result<(), Vec<ErrorDetail>> {
        let items = yaml
            .as_vec()
            .ok_or_else(|| vec![failure(format!("\"{}\" must be an array", label), yaml)])?;

        let mut errors = Vec::new();

        if let Some(min_items) = self.min_items {
            if items.len() < min_items {
                errors.push(failure(
                    format!("\"{}\" must contain at least {} items", label, min_items),
                    yaml,
                ));
            }
        }

        if let Some(max_items) = self.max_items {
            if items.len() > max_items {
                errors.push(failure(
                    format!(
                        "\"{}\" must contain less than or equal to {} items",
                        label, max_items
                    ),
                    yaml,
                ));
            }
        }

        if let Some(schema) = &self.items {
            for (i, item) in items.iter().enumerate() {
                if let Err(details) = schema.validate(item, &format!("[{}]", i)) {
                    errors.extend(details.into_iter().map(ErrorDetail::add_path_index(i)));
                }
            }
        }

        collected(errors)
    }
}
