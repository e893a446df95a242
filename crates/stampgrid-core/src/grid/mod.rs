//! Source stamp selection and build alignment.
//!
//! Assembly runs in three passes over a read-only backend:
//! 1. [`collect`]: earliest start time per distinct stamp, over the selected builders;
//! 2. [`rank`]: keep the `width` most recent stamps, oldest first;
//! 3. [`align`]: per builder, walk history newest-first and slot builds under their stamp.
//!
//! The resulting [`Grid`] is orientation-neutral. [`Grid::rows`] gives builders as rows,
//! [`Grid::stamp_rows`] gives the transposed layout.

mod align;
pub use align::align_builds;

mod collect;
pub use collect::{StampTimes, collect_from, collect_stamps};

mod rank;
pub use rank::rank_recent;

use stampgrid_model::{Build, BuilderInfo, BuilderSummary, GridQuery, ProjectInfo, RankedStamp};
use tracing::{debug, instrument, trace};

use crate::{BuildHistory, StatusBackend, builder_summary, error::CoreError};

/// One builder and its slots, aligned with [`Grid::stamps`].
#[derive(Debug, Clone)]
pub struct GridRow {
    pub builder: BuilderSummary,
    pub builds: Vec<Option<Build>>,
}

/// One stamp and the matching build of every builder, in builder order.
#[derive(Debug, Clone)]
pub struct StampRow<'a> {
    pub stamp: &'a RankedStamp,
    pub builds: Vec<Option<&'a Build>>,
}

/// Assembled build grid.
#[derive(Debug, Clone)]
pub struct Grid {
    pub project: ProjectInfo,
    /// Selected stamps, ascending by earliest start.
    pub stamps: Vec<RankedStamp>,
    /// Selected builders sorted by name.
    pub rows: Vec<GridRow>,
}

impl Grid {
    /// Builder-major view: one row per builder.
    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    /// Slots of a single builder, or `None` if it is not part of the grid.
    pub fn slots(&self, builder: &str) -> Option<&[Option<Build>]> {
        self.rows
            .iter()
            .find(|r| r.builder.name == builder)
            .map(|r| r.builds.as_slice())
    }

    pub fn builder_names(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.builder.name.as_str())
    }

    /// Stamp-major view: one row per stamp, columns follow [`Grid::builder_names`].
    pub fn stamp_rows(&self) -> Vec<StampRow<'_>> {
        self.stamps
            .iter()
            .enumerate()
            .map(|(i, stamp)| StampRow {
                stamp,
                builds: self.rows.iter().map(|r| r.builds[i].as_ref()).collect(),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }
}

/// Builders passing the category filter, sorted by name.
pub fn select_builders<B>(backend: &B, categories: &[String]) -> Vec<BuilderInfo>
where
    B: StatusBackend + ?Sized,
{
    let mut builders: Vec<BuilderInfo> = backend
        .builder_names()
        .iter()
        .filter_map(|name| backend.builder(name))
        .filter(|b| b.in_categories(categories))
        .collect();
    builders.sort_by(|a, b| a.name.cmp(&b.name));
    builders
}

/// Assemble the grid for `query`.
///
/// The width is validated before the backend is touched; everything after that degrades
/// to empty stamps or empty slots rather than failing.
#[instrument(
    level = "debug",
    skip(backend, query),
    fields(width = query.width, branch = ?query.branch)
)]
pub fn assemble_grid<B>(backend: &B, query: &GridQuery) -> Result<Grid, CoreError>
where
    B: StatusBackend + ?Sized,
{
    let width = query.width()?;

    let builders = select_builders(backend, &query.categories);
    let times = collect_from(backend, &builders, &query.branch);
    let distinct = times.len();
    let stamps = rank_recent(times, width);

    let schedulers = backend.schedulers();
    let rows: Vec<GridRow> = builders
        .iter()
        .map(|info| {
            let builds = align_builds(BuildHistory::new(backend, info), &stamps);
            trace!(
                builder = %info.name,
                filled = builds.iter().filter(|b| b.is_some()).count(),
                "aligned builds"
            );
            GridRow {
                builder: builder_summary(info, &schedulers),
                builds,
            }
        })
        .collect();

    debug!(
        builders = rows.len(),
        distinct,
        selected = stamps.len(),
        "grid assembled"
    );

    Ok(Grid {
        project: backend.project(),
        stamps,
        rows,
    })
}
