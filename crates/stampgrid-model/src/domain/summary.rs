use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use crate::{BuilderName, BuilderState};

/// Builder header data for a grid: activity state and queue depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderSummary {
    pub name: BuilderName,
    /// Link to the builder page, with the name percent-encoded.
    pub url: String,
    pub state: BuilderState,
    /// Builds requested but not started.
    pub pending: usize,
    /// Scheduler-predicted start times for upcoming builds.
    #[serde(default, with = "super::time_serde::vec")]
    pub upcoming: Vec<SystemTime>,
}
