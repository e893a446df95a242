use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use crate::{BuildNumber, BuilderName, SourceStamp};

/// Final outcome of a finished build or step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BuildResult {
    Success,
    Warnings,
    Failure,
    Skipped,
    Exception,
    Retry,
}

impl BuildResult {
    /// Status class used by renderers to colour a cell.
    pub fn css_class(&self) -> &'static str {
        match self {
            BuildResult::Success => "success",
            BuildResult::Warnings => "warnings",
            BuildResult::Failure => "failure",
            BuildResult::Skipped => "skipped",
            BuildResult::Exception => "exception",
            BuildResult::Retry => "retry",
        }
    }
}

/// One step executed as part of a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStep {
    pub name: String,
    /// Status words reported by the step; empty while it has nothing to say.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<BuildResult>,
}

impl BuildStep {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Vec::new(),
            result: None,
        }
    }
}

/// Snapshot of a single build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    /// Owning builder.
    pub builder: BuilderName,
    /// Position in the builder's history.
    pub number: BuildNumber,
    pub source_stamp: SourceStamp,
    /// When the build started; `None` for builds that never ran.
    #[serde(default, with = "super::time_serde::option")]
    pub started_at: Option<SystemTime>,
    /// When the build finished; `None` while it is still running.
    #[serde(default, with = "super::time_serde::option")]
    pub finished_at: Option<SystemTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<BuildResult>,
    /// Summary words, e.g. `["build", "successful"]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<BuildStep>,
}

impl Build {
    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    /// Number of the build that ran before this one on the same builder.
    pub fn previous_number(&self) -> Option<BuildNumber> {
        self.number.checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    fn build(number: BuildNumber) -> Build {
        Build {
            builder: "linux".to_string(),
            number,
            source_stamp: SourceStamp::new("r1"),
            started_at: Some(UNIX_EPOCH + Duration::from_secs(100)),
            finished_at: None,
            result: None,
            text: vec![],
            steps: vec![],
        }
    }

    #[test]
    fn first_build_has_no_previous() {
        assert_eq!(build(0).previous_number(), None);
        assert_eq!(build(7).previous_number(), Some(6));
    }

    #[test]
    fn finished_flag_follows_finish_time() {
        let mut b = build(1);
        assert!(!b.is_finished());
        b.finished_at = Some(UNIX_EPOCH + Duration::from_secs(160));
        assert!(b.is_finished());
    }

    #[test]
    fn serde_times_as_epoch_seconds() {
        let b = build(3);
        let json = serde_json::to_value(&b).unwrap();
        assert_eq!(json["startedAt"], 100);
        assert!(json["finishedAt"].is_null());

        let back: Build = serde_json::from_value(json).unwrap();
        assert_eq!(back.started_at, b.started_at);
        assert_eq!(back.finished_at, None);
        assert_eq!(back.source_stamp, b.source_stamp);
    }

    #[test]
    fn out_of_range_times_are_rejected() {
        for field in ["startedAt", "finishedAt"] {
            let json = format!(
                r#"{{"builder":"a","number":0,"sourceStamp":{{}},"{field}":{}}}"#,
                u64::MAX
            );
            let err = serde_json::from_str::<Build>(&json).unwrap_err();
            assert!(err.to_string().contains("out of range"), "{field}: {err}");
        }
    }
}
