use std::{collections::HashMap, time::SystemTime};

use stampgrid_model::{BranchFilter, BuilderInfo, SourceStamp};
use tracing::trace;

use super::select_builders;
use crate::{BuildHistory, StatusBackend};

/// Distinct source stamps with the earliest start time observed for each.
///
/// Entries keep the order in which stamps were first seen.
#[derive(Debug, Default, Clone)]
pub struct StampTimes {
    entries: Vec<(SourceStamp, SystemTime)>,
    index: HashMap<SourceStamp, usize>,
}

impl StampTimes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sighting, keeping the earliest time for a known stamp.
    pub fn record(&mut self, stamp: &SourceStamp, started_at: SystemTime) {
        match self.index.get(stamp) {
            Some(&i) => {
                let earliest = &mut self.entries[i].1;
                if started_at < *earliest {
                    *earliest = started_at;
                }
            }
            None => {
                self.index.insert(stamp.clone(), self.entries.len());
                self.entries.push((stamp.clone(), started_at));
            }
        }
    }

    pub fn earliest(&self, stamp: &SourceStamp) -> Option<SystemTime> {
        self.index.get(stamp).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume into `(stamp, earliest)` pairs in discovery order.
    pub fn into_entries(self) -> Vec<(SourceStamp, SystemTime)> {
        self.entries
    }
}

/// Collect stamps from every builder in `categories` (all builders when empty).
pub fn collect_stamps<B>(backend: &B, categories: &[String], branch: &BranchFilter) -> StampTimes
where
    B: StatusBackend + ?Sized,
{
    let builders = select_builders(backend, categories);
    collect_from(backend, &builders, branch)
}

/// Collect stamps from an already selected builder set.
///
/// Builds that never started are skipped, as are builds off the requested branch.
pub fn collect_from<B>(backend: &B, builders: &[BuilderInfo], branch: &BranchFilter) -> StampTimes
where
    B: StatusBackend + ?Sized,
{
    let mut times = StampTimes::new();

    for builder in builders {
        let mut seen = 0usize;
        for build in BuildHistory::new(backend, builder) {
            let Some(started_at) = build.started_at else {
                continue;
            };
            if !branch.matches(build.source_stamp.branch()) {
                continue;
            }
            times.record(&build.source_stamp, started_at);
            seen += 1;
        }
        trace!(builder = %builder.name, builds = seen, "collected source stamps");
    }

    times
}
