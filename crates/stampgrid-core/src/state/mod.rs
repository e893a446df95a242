use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
    time::SystemTime,
};

use stampgrid_model::{
    Build, BuildNumber, BuildResult, BuildStep, BuilderInfo, BuilderName, BuilderState,
    PendingBuild, ProjectInfo, SchedulerInfo, SourceStamp,
};
use tracing::trace;

use crate::StatusBackend;

/// In-memory status storage.
///
/// Each builder owns an append-only build list where a build's number is its index,
/// so walking history backward is an index decrement.
#[derive(Clone)]
pub struct StatusStore {
    inner: Arc<RwLock<StatusStoreInner>>,
}

#[derive(Default)]
struct StatusStoreInner {
    project: ProjectInfo,
    /// Builders indexed by name.
    builders: HashMap<BuilderName, BuilderEntry>,
    /// Registration order, for stable listing.
    order: Vec<BuilderName>,
    schedulers: Vec<SchedulerInfo>,
}

struct BuilderEntry {
    category: Option<String>,
    state: BuilderState,
    pending: Vec<PendingBuild>,
    builds: Vec<Build>,
}

impl BuilderEntry {
    fn info(&self, name: &str) -> BuilderInfo {
        BuilderInfo {
            name: name.to_string(),
            category: self.category.clone(),
            state: self.state,
            pending: self.pending.clone(),
            latest_build: self.builds.last().map(|b| b.number),
        }
    }
}

impl StatusStore {
    /// Create empty status storage.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StatusStoreInner::default())),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, StatusStoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StatusStoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_project(&self, project: ProjectInfo) {
        self.write().project = project;
    }

    /// Register a builder. Re-registering an existing name only updates its category.
    pub fn add_builder(&self, name: impl Into<BuilderName>, category: Option<String>) {
        let name = name.into();
        let mut inner = self.write();

        if let Some(entry) = inner.builders.get_mut(&name) {
            entry.category = category;
            return;
        }

        inner.builders.insert(
            name.clone(),
            BuilderEntry {
                category,
                state: BuilderState::Offline,
                pending: Vec::new(),
                builds: Vec::new(),
            },
        );
        trace!(builder = %name, "builder registered");
        inner.order.push(name);
    }

    /// Update builder activity. Returns `false` for an unknown builder.
    pub fn set_state(&self, builder: &str, state: BuilderState) -> bool {
        let mut inner = self.write();
        match inner.builders.get_mut(builder) {
            Some(entry) => {
                entry.state = state;
                true
            }
            None => false,
        }
    }

    /// Queue a build request that has not started yet.
    pub fn request_build(&self, builder: &str, stamp: SourceStamp) -> bool {
        let mut inner = self.write();
        match inner.builders.get_mut(builder) {
            Some(entry) => {
                entry.pending.push(PendingBuild {
                    source_stamp: stamp,
                    submitted_at: SystemTime::now(),
                });
                true
            }
            None => false,
        }
    }

    /// Append a build to a builder's history and return its number.
    ///
    /// A matching pending request, if any, is consumed. `started_at` is `None` for builds
    /// that were created but never ran.
    pub fn add_build(
        &self,
        builder: &str,
        stamp: SourceStamp,
        started_at: Option<SystemTime>,
    ) -> Option<BuildNumber> {
        let mut inner = self.write();
        let entry = inner.builders.get_mut(builder)?;

        if let Some(pos) = entry.pending.iter().position(|p| p.source_stamp == stamp) {
            entry.pending.remove(pos);
        }

        let number = BuildNumber::try_from(entry.builds.len()).ok()?;
        entry.builds.push(Build {
            builder: builder.to_string(),
            number,
            source_stamp: stamp,
            started_at,
            finished_at: None,
            result: None,
            text: Vec::new(),
            steps: Vec::new(),
        });
        trace!(builder, number, "build added");
        Some(number)
    }

    /// Append a step to a build. Returns `false` if the build does not exist.
    pub fn add_step(&self, builder: &str, number: BuildNumber, step: BuildStep) -> bool {
        self.with_build(builder, number, |b| b.steps.push(step))
    }

    /// Mark a build finished. Returns `false` if the build does not exist.
    pub fn finish_build(
        &self,
        builder: &str,
        number: BuildNumber,
        result: BuildResult,
        text: Vec<String>,
        finished_at: SystemTime,
    ) -> bool {
        self.with_build(builder, number, |b| {
            b.result = Some(result);
            b.text = text;
            b.finished_at = Some(finished_at);
        })
    }

    pub fn add_scheduler(&self, scheduler: SchedulerInfo) {
        self.write().schedulers.push(scheduler);
    }

    fn with_build(&self, builder: &str, number: BuildNumber, f: impl FnOnce(&mut Build)) -> bool {
        let mut inner = self.write();
        let build = inner
            .builders
            .get_mut(builder)
            .and_then(|e| e.builds.get_mut(number as usize));
        match build {
            Some(b) => {
                f(b);
                true
            }
            None => false,
        }
    }
}

impl Default for StatusStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBackend for StatusStore {
    fn project(&self) -> ProjectInfo {
        self.read().project.clone()
    }

    fn builder_names(&self) -> Vec<BuilderName> {
        self.read().order.clone()
    }

    fn builder(&self, name: &str) -> Option<BuilderInfo> {
        let inner = self.read();
        inner.builders.get(name).map(|e| e.info(name))
    }

    fn build(&self, builder: &str, number: BuildNumber) -> Option<Build> {
        let inner = self.read();
        inner
            .builders
            .get(builder)
            .and_then(|e| e.builds.get(number as usize))
            .cloned()
    }

    fn schedulers(&self) -> Vec<SchedulerInfo> {
        self.read().schedulers.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BuildHistory;
    use std::time::{Duration, UNIX_EPOCH};

    fn at(secs: u64) -> Option<SystemTime> {
        Some(UNIX_EPOCH + Duration::from_secs(secs))
    }

    #[test]
    fn add_and_get_builder() {
        let store = StatusStore::new();
        store.add_builder("linux", Some("release".to_string()));

        let info = store.builder("linux").expect("builder should exist");
        assert_eq!(info.name, "linux");
        assert_eq!(info.category.as_deref(), Some("release"));
        assert_eq!(info.state, BuilderState::Offline);
        assert_eq!(info.latest_build, None);
        assert!(store.builder("mac").is_none());
    }

    #[test]
    fn builder_names_keep_registration_order() {
        let store = StatusStore::new();
        store.add_builder("zeta", None);
        store.add_builder("alpha", None);
        store.add_builder("zeta", Some("docs".to_string()));

        assert_eq!(store.builder_names(), vec!["zeta", "alpha"]);
        assert_eq!(
            store.builder("zeta").unwrap().category.as_deref(),
            Some("docs")
        );
    }

    #[test]
    fn builds_are_numbered_sequentially() {
        let store = StatusStore::new();
        store.add_builder("linux", None);

        assert_eq!(store.add_build("linux", SourceStamp::new("r1"), at(10)), Some(0));
        assert_eq!(store.add_build("linux", SourceStamp::new("r2"), at(20)), Some(1));
        assert_eq!(store.add_build("mac", SourceStamp::new("r2"), at(20)), None);

        assert_eq!(store.builder("linux").unwrap().latest_build, Some(1));
        let b = store.build("linux", 1).unwrap();
        assert_eq!(b.source_stamp, SourceStamp::new("r2"));
        assert!(store.build("linux", 2).is_none());
    }

    #[test]
    fn add_build_consumes_matching_pending_request() {
        let store = StatusStore::new();
        store.add_builder("linux", None);
        store.request_build("linux", SourceStamp::new("r1"));
        store.request_build("linux", SourceStamp::new("r2"));
        assert_eq!(store.builder("linux").unwrap().pending.len(), 2);

        store.add_build("linux", SourceStamp::new("r1"), at(10));
        let pending = store.builder("linux").unwrap().pending;
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].source_stamp, SourceStamp::new("r2"));
    }

    #[test]
    fn finish_build_records_outcome() {
        let store = StatusStore::new();
        store.add_builder("linux", None);
        let n = store.add_build("linux", SourceStamp::new("r1"), at(10)).unwrap();

        assert!(store.add_step("linux", n, BuildStep::new("compile")));
        assert!(store.finish_build(
            "linux",
            n,
            BuildResult::Success,
            vec!["build".into(), "successful".into()],
            UNIX_EPOCH + Duration::from_secs(30),
        ));
        assert!(!store.finish_build("linux", 9, BuildResult::Failure, vec![], UNIX_EPOCH));

        let b = store.build("linux", n).unwrap();
        assert!(b.is_finished());
        assert_eq!(b.result, Some(BuildResult::Success));
        assert_eq!(b.steps.len(), 1);
    }

    #[test]
    fn set_state_unknown_builder() {
        let store = StatusStore::new();
        store.add_builder("linux", None);
        assert!(store.set_state("linux", BuilderState::Building));
        assert!(!store.set_state("mac", BuilderState::Idle));
        assert_eq!(store.builder("linux").unwrap().state, BuilderState::Building);
    }

    #[test]
    fn history_walks_newest_first() {
        let store = StatusStore::new();
        store.add_builder("linux", None);
        for (rev, t) in [("r1", 10), ("r2", 20), ("r3", 30)] {
            store.add_build("linux", SourceStamp::new(rev), at(t));
        }

        let info = store.builder("linux").unwrap();
        let numbers: Vec<_> = BuildHistory::new(&store, &info).map(|b| b.number).collect();
        assert_eq!(numbers, vec![2, 1, 0]);
    }

    #[test]
    fn history_of_empty_builder_is_empty() {
        let store = StatusStore::new();
        store.add_builder("linux", None);
        let info = store.builder("linux").unwrap();
        assert_eq!(BuildHistory::new(&store, &info).count(), 0);
    }

    #[test]
    fn clones_share_state() {
        let store = StatusStore::new();
        let other = store.clone();
        other.add_builder("linux", None);
        other.add_scheduler(SchedulerInfo {
            name: "nightly".to_string(),
            builder_names: vec!["linux".to_string()],
            pending_build_times: vec![],
        });

        assert!(store.builder("linux").is_some());
        assert_eq!(store.schedulers().len(), 1);
    }
}
