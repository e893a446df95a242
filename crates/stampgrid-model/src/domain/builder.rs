use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use crate::{BuildNumber, BuilderName, SourceStamp};

/// Current activity of a builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BuilderState {
    /// No worker attached.
    Offline,
    /// Attached and doing nothing.
    Idle,
    /// Idle, but a scheduler predicts an upcoming build.
    Waiting,
    /// Waiting for a lock held by another build.
    Interlocked,
    /// At least one build in progress.
    Building,
}

impl BuilderState {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuilderState::Offline => "offline",
            BuilderState::Idle => "idle",
            BuilderState::Waiting => "waiting",
            BuilderState::Interlocked => "interlocked",
            BuilderState::Building => "building",
        }
    }
}

/// Build request accepted by a builder but not started yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingBuild {
    pub source_stamp: SourceStamp,
    #[serde(with = "super::time_serde")]
    pub submitted_at: SystemTime,
}

/// Builder metadata, without its build history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderInfo {
    pub name: BuilderName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub state: BuilderState,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pending: Vec<PendingBuild>,
    /// Number of the newest build, if the builder has run at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_build: Option<BuildNumber>,
}

impl BuilderInfo {
    /// Returns `true` if the builder passes a category filter.
    ///
    /// An empty filter admits every builder; otherwise an uncategorised builder never matches.
    pub fn in_categories(&self, categories: &[String]) -> bool {
        if categories.is_empty() {
            return true;
        }
        self.category
            .as_deref()
            .is_some_and(|c| categories.iter().any(|wanted| wanted == c))
    }
}
