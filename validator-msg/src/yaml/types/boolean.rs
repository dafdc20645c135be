use crate::details::ErrorDetail;
use crate::yaml::error::SchemaError;
use crate::yaml::utils::YamlUtils;
use crate::yaml::{failure, Flags, Validate};
use std::convert::TryFrom;
use yaml_rust::Yaml;

#[derive(Debug, Clone, Default)]
pub struct SchemaBoolean {
    pub(crate) flags: Flags,
}

impl<'schema> TryFrom<&'schema Yaml> for SchemaBoolean {
    type Error = SchemaError<'schema>;
    fn try_from(yaml: &'schema Yaml) -> Result<Self, Self::Error> {
        yaml.strict_contents(&["type"], &["label", "required"])?;

        Ok(SchemaBoolean {
            flags: Flags::try_from(yaml)?,
        })
    }
}

impl Validate for SchemaBoolean {
    fn flags(&self) -> &Flags {
        &self.flags
    }

    fn validate_present(&self, yaml: &Yaml, label: &str) -> Result<(), Vec<ErrorDetail>> {
        match yaml {
            Yaml::Boolean(_) => Ok(()),
            _ => Err(vec![failure(
                format!("\"{}\" must be a boolean", label),
                yaml,
            )]),
        }
    }
}
