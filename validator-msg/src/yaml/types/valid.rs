use crate::details::ErrorDetail;
use crate::yaml::error::{add_path_name, SchemaError, SchemaErrorKind};
use crate::yaml::utils::{render_value, YamlUtils};
use crate::yaml::{failure, Flags, Validate};
use std::convert::TryFrom;
use yaml_rust::Yaml;

/// Accepts only values equal to one of a fixed list.
#[derive(Debug, Clone, Default)]
pub struct SchemaValid {
    pub(crate) flags: Flags,
    values: Vec<Yaml>,
}

impl SchemaValid {
    pub(crate) fn new(values: Vec<Yaml>) -> Self {
        SchemaValid {
            flags: Flags::default(),
            values,
        }
    }
}

impl<'schema> TryFrom<&'schema Yaml> for SchemaValid {
    type Error = SchemaError<'schema>;
    fn try_from(yaml: &'schema Yaml) -> Result<Self, Self::Error> {
        yaml.strict_contents(&["type", "values"], &["label", "required"])?;

        let flags = Flags::try_from(yaml)?;

        let values = yaml
            .lookup("values", "array", Yaml::as_vec)
            .map_err(add_path_name("values"))?;

        if values.is_empty() {
            return Err(SchemaErrorKind::MalformedField {
                error: "at least one allowed value must be listed".into(),
            }
            .with_path_name("values"));
        }

        Ok(SchemaValid {
            flags,
            values: values.clone(),
        })
    }
}

impl Validate for SchemaValid {
    fn flags(&self) -> &Flags {
        &self.flags
    }

    fn validate_present(&self, yaml: &Yaml, label: &str) -> Result<(), Vec<ErrorDetail>> {
        if self.values.contains(yaml) {
            return Ok(());
        }

        let allowed: Vec<String> = self
            .values
            .iter()
            .filter_map(render_value)
            .collect();

        Err(vec![failure(
            format!("\"{}\" must be one of [{}]", label, allowed.join(", ")),
            yaml,
        )])
    }
}
