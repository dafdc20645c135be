#![macro_use]

#[cfg(feature = "smallvec")]
pub type BreadcrumbSegmentVec = smallvec::SmallVec<[BreadcrumbSegment; 8]>;
#[cfg(not(feature = "smallvec"))]
pub type BreadcrumbSegmentVec = Vec<BreadcrumbSegment>;

#[cfg(test)]
#[cfg(feature = "smallvec")]
macro_rules! breadcrumb{
    ( $( $x:expr ),* ) => {
        crate::breadcrumb::Breadcrumb::new(smallvec::smallvec![
            $(crate::breadcrumb::BreadcrumbSegment::from($x),)*
        ])
    }
}

#[cfg(test)]
#[cfg(not(feature = "smallvec"))]
macro_rules! breadcrumb{
    ( $( $x:expr ),* ) => {
        crate::breadcrumb::Breadcrumb::new(vec![
            $(crate::breadcrumb::BreadcrumbSegment::from($x),)*
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreadcrumbSegment {
    Name(String),
    Index(usize),
}

impl From<&str> for BreadcrumbSegment {
    fn from(name: &str) -> Self {
        BreadcrumbSegment::Name(name.to_string())
    }
}

impl From<usize> for BreadcrumbSegment {
    fn from(index: usize) -> Self {
        BreadcrumbSegment::Index(index)
    }
}

/// Location of a value inside the validated document.
///
/// Segments are pushed innermost-first while an error travels back up
/// through the nested schemas, so they are stored in reverse order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    segments: BreadcrumbSegmentVec,
}

impl Breadcrumb {
    pub fn new(segments: BreadcrumbSegmentVec) -> Self {
        Breadcrumb { segments }
    }

    pub fn push(&mut self, segment: BreadcrumbSegment) {
        self.segments.push(segment);
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments from the document root down to the value.
    pub fn segments(&self) -> impl Iterator<Item = &BreadcrumbSegment> {
        self.segments.iter().rev()
    }
}

impl std::fmt::Display for Breadcrumb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in self.segments() {
            match segment {
                BreadcrumbSegment::Name(name) => write!(f, ".{}", name)?,
                BreadcrumbSegment::Index(index) => write!(f, "[{}]", index)?,
            };
        }

        Ok(())
    }
}

impl Default for Breadcrumb {
    fn default() -> Self {
        Breadcrumb {
            segments: BreadcrumbSegmentVec::new(),
        }
    }
}
