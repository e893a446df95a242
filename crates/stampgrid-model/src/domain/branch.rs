use serde::{Deserialize, Serialize};

use crate::TRUNK_BRANCH;

/// Branch restriction applied while collecting source stamps.
///
/// `Any` is a distinct variant rather than a reserved branch name, so a real branch
/// literally called "any" stays selectable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BranchFilter {
    /// Every branch is eligible.
    #[default]
    Any,
    /// Only stamps on this branch; `None` selects the default branch.
    Branch(Option<String>),
}

impl BranchFilter {
    /// Filter for the default (unnamed) branch.
    pub fn default_branch() -> Self {
        BranchFilter::Branch(None)
    }

    pub fn named(branch: impl Into<String>) -> Self {
        BranchFilter::Branch(Some(branch.into()))
    }

    /// Interpret a request parameter. [`TRUNK_BRANCH`] maps to the default branch.
    pub fn from_param(value: &str) -> Self {
        if value == TRUNK_BRANCH {
            Self::default_branch()
        } else {
            Self::named(value)
        }
    }

    /// Returns `true` if a stamp on `branch` passes the filter.
    pub fn matches(&self, branch: Option<&str>) -> bool {
        match self {
            BranchFilter::Any => true,
            BranchFilter::Branch(wanted) => wanted.as_deref() == branch,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, BranchFilter::Any)
    }
}
