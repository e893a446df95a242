mod constants;
pub use constants::{DEFAULT_WIDTH, MIN_RELOAD_SECS, TRUNK_BRANCH};

mod source_stamp;
pub use source_stamp::{Patch, SourceStamp};

mod ranked_stamp;
pub use ranked_stamp::RankedStamp;

mod branch;
pub use branch::BranchFilter;

mod build;
pub use build::{Build, BuildResult, BuildStep};

mod build_cell;
pub use build_cell::BuildCell;

mod builder;
pub use builder::{BuilderInfo, BuilderState, PendingBuild};

mod scheduler;
pub use scheduler::SchedulerInfo;

mod project;
pub use project::ProjectInfo;

mod grid_query;
pub use grid_query::{GridQuery, Width};

mod summary;
pub use summary::BuilderSummary;

pub(crate) mod time_serde;

/// Unique builder name.
///
/// Builders are keyed by name everywhere; the grid sorts rows by it.
pub type BuilderName = String;

/// Sequence number of a build within its builder.
///
/// Numbers start at 0 and grow by one per build; `number - 1` is the previous build.
pub type BuildNumber = u32;
