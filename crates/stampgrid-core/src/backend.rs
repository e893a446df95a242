use stampgrid_model::{Build, BuildNumber, BuilderInfo, BuilderName, ProjectInfo, SchedulerInfo};

/// Read-only access to CI status.
///
/// Implementations return owned snapshots; callers never hold locks or references into
/// backend state. A builder's history is addressed by build number, newest first via
/// [`BuilderInfo::latest_build`] and [`Build::previous_number`].
pub trait StatusBackend: Send + Sync {
    /// Project identity for page headers.
    fn project(&self) -> ProjectInfo {
        ProjectInfo::default()
    }

    /// Names of all builders, in a stable order.
    fn builder_names(&self) -> Vec<BuilderName>;

    /// Builder metadata, or `None` for an unknown name.
    fn builder(&self, name: &str) -> Option<BuilderInfo>;

    /// A single build, or `None` if the builder has no build with that number.
    fn build(&self, builder: &str, number: BuildNumber) -> Option<Build>;

    /// All schedulers, for upcoming-build predictions.
    fn schedulers(&self) -> Vec<SchedulerInfo>;
}
