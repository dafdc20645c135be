use thiserror::Error;

/// Raised when validation fails. The message is the complete, formatted text
/// block, optionally preceded by a title line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationFailed {
    message: String,
}

impl ValidationFailed {
    pub fn new<M: Into<String>>(message: M) -> Self {
        ValidationFailed {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}
