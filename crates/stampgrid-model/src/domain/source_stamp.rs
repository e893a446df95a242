use serde::{Deserialize, Serialize};

/// Patch applied on top of a revision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patch {
    /// Strip level passed to `patch -p`.
    pub level: u32,
    /// Unified diff body.
    pub body: String,
}

/// Revision, branch and patch combination that triggered one or more builds.
///
/// Stamps compare by value: two builds share a stamp when every field is equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceStamp {
    /// Branch name; `None` is the default branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Revision identifier; `None` means "latest at build time".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Patch>,
}

impl SourceStamp {
    /// Stamp for `revision` on the default branch.
    pub fn new(revision: impl Into<String>) -> Self {
        Self {
            branch: None,
            revision: Some(revision.into()),
            patch: None,
        }
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn with_patch(mut self, level: u32, body: impl Into<String>) -> Self {
        self.patch = Some(Patch {
            level,
            body: body.into(),
        });
        self
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }
}
