use std::num::NonZeroUsize;

use super::{BranchFilter, DEFAULT_WIDTH};
use crate::ModelError;

/// Validated grid width: the number of source stamps to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Width(NonZeroUsize);

impl Width {
    pub fn new(width: i64) -> Result<Self, ModelError> {
        usize::try_from(width)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Width)
            .ok_or(ModelError::InvalidWidth(width))
    }

    #[inline]
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for Width {
    type Error = ModelError;

    fn try_from(width: i64) -> Result<Self, Self::Error> {
        Width::new(width)
    }
}

/// Parameters for one grid assembly.
///
/// `width` is kept as requested and validated when the grid is assembled,
/// so a bad value is reported before any backend traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridQuery {
    pub width: i64,
    /// Builder categories to include; empty means all builders.
    pub categories: Vec<String>,
    pub branch: BranchFilter,
}

impl GridQuery {
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            categories: Vec::new(),
            branch: BranchFilter::Any,
        }
    }

    pub fn with_width(mut self, width: i64) -> Self {
        self.width = width;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    pub fn with_branch(mut self, branch: BranchFilter) -> Self {
        self.branch = branch;
        self
    }

    /// Validate the requested width.
    pub fn width(&self) -> Result<Width, ModelError> {
        Width::new(self.width)
    }
}

impl Default for GridQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_is_five_wide_any_branch() {
        let q = GridQuery::default();
        assert_eq!(q.width().unwrap().get(), 5);
        assert!(q.categories.is_empty());
        assert!(q.branch.is_any());
    }

    #[test]
    fn non_positive_width_is_rejected() {
        assert_eq!(Width::new(0), Err(ModelError::InvalidWidth(0)));
        assert_eq!(Width::new(-3), Err(ModelError::InvalidWidth(-3)));
        assert!(GridQuery::new().with_width(0).width().is_err());
    }

    #[test]
    fn builder_methods_accumulate() {
        let q = GridQuery::new()
            .with_width(2)
            .with_category("release")
            .with_category("nightly")
            .with_branch(BranchFilter::named("stable"));
        assert_eq!(q.width().unwrap().get(), 2);
        assert_eq!(q.categories, vec!["release", "nightly"]);
        assert!(q.branch.matches(Some("stable")));
    }
}
