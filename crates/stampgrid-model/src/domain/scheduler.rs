use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use crate::BuilderName;

/// Read-only view of a scheduler: which builders it feeds and when it expects to fire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerInfo {
    pub name: String,
    pub builder_names: Vec<BuilderName>,
    /// Predicted start times of builds this scheduler will request.
    #[serde(default, with = "super::time_serde::vec")]
    pub pending_build_times: Vec<SystemTime>,
}

impl SchedulerInfo {
    pub fn targets(&self, builder: &str) -> bool {
        self.builder_names.iter().any(|b| b == builder)
    }
}
