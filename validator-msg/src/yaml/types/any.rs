use crate::details::ErrorDetail;
use crate::yaml::error::SchemaError;
use crate::yaml::utils::YamlUtils;
use crate::yaml::{Flags, Validate};
use std::convert::TryFrom;
use yaml_rust::Yaml;

/// Accepts every present value.
#[derive(Debug, Clone, Default)]
pub struct SchemaAny {
    pub(crate) flags: Flags,
}

impl<'schema> TryFrom<&'schema Yaml> for SchemaAny {
    type Error = SchemaError<'schema>;
    fn try_from(yaml: &'schema Yaml) -> Result<Self, Self::Error> {
        yaml.strict_contents(&["type"], &["label", "required"])?;

        Ok(SchemaAny {
            flags: Flags::try_from(yaml)?,
        })
    }
}

impl Validate for SchemaAny {
    fn flags(&self) -> &Flags {
        &self.flags
    }

    fn validate_present(&self, _: &Yaml, _: &str) -> Result<(), Vec<ErrorDetail>> {
        Ok(())
    }
}
