use crate::breadcrumb::{Breadcrumb, BreadcrumbSegment};

/// One failed rule, as reported by a validation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    /// Human-readable reason. Any `"` characters are dropped when rendered.
    pub message: String,
    /// The offending value rendered as text, `None` if the value was absent.
    pub value: Option<String>,
    pub path: Breadcrumb,
}

impl ErrorDetail {
    pub fn new<M: Into<String>>(message: M, value: Option<String>) -> Self {
        ErrorDetail {
            message: message.into(),
            value,
            path: Breadcrumb::default(),
        }
    }

    pub fn add_path_name(path: &str) -> impl Fn(ErrorDetail) -> ErrorDetail + '_ {
        move |mut detail: ErrorDetail| -> ErrorDetail {
            detail.path.push(BreadcrumbSegment::Name(path.to_string()));
            detail
        }
    }

    pub fn add_path_index(index: usize) -> impl Fn(ErrorDetail) -> ErrorDetail {
        move |mut detail: ErrorDetail| -> ErrorDetail {
            detail.path.push(BreadcrumbSegment::Index(index));
            detail
        }
    }
}

/// The full error descriptor of a single validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDetails {
    details: Vec<ErrorDetail>,
}

impl ErrorDetails {
    pub fn new() -> Self {
        ErrorDetails::default()
    }

    pub fn push(&mut self, detail: ErrorDetail) {
        self.details.push(detail);
    }

    pub fn len(&self) -> usize {
        self.details.len()
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ErrorDetail> {
        self.details.iter()
    }

    /// `Ok(())` for an empty descriptor, the descriptor itself otherwise.
    pub fn into_result(self) -> Result<(), ErrorDetails> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<Vec<ErrorDetail>> for ErrorDetails {
    fn from(details: Vec<ErrorDetail>) -> Self {
        ErrorDetails { details }
    }
}

impl From<ErrorDetail> for ErrorDetails {
    fn from(detail: ErrorDetail) -> Self {
        ErrorDetails {
            details: vec![detail],
        }
    }
}

impl std::iter::FromIterator<ErrorDetail> for ErrorDetails {
    fn from_iter<I: IntoIterator<Item = ErrorDetail>>(iter: I) -> Self {
        ErrorDetails {
            details: iter.into_iter().collect(),
        }
    }
}

impl Extend<ErrorDetail> for ErrorDetails {
    fn extend<I: IntoIterator<Item = ErrorDetail>>(&mut self, iter: I) {
        self.details.extend(iter);
    }
}

impl IntoIterator for ErrorDetails {
    type Item = ErrorDetail;
    type IntoIter = std::vec::IntoIter<ErrorDetail>;

    fn into_iter(self) -> Self::IntoIter {
        self.details.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorDetails {
    type Item = &'a ErrorDetail;
    type IntoIter = std::slice::Iter<'a, ErrorDetail>;

    fn into_iter(self) -> Self::IntoIter {
        self.details.iter()
    }
}
