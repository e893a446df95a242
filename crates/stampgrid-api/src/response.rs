use serde::Serialize;
use stampgrid_core::{BuildStatusView, Grid};
use stampgrid_model::{BranchFilter, BuildCell, BuildStep, BuilderSummary, ProjectInfo, RankedStamp};

use crate::request::GridRequest;

/// Builder header plus one optional cell per stamp.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderRow {
    #[serde(flatten)]
    pub builder: BuilderSummary,
    pub builds: Vec<Option<BuildCell>>,
}

/// Standard layout: builders down the side, stamps across the top.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridResponse {
    pub project: ProjectInfo,
    pub categories: Vec<String>,
    pub branch: BranchFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reload: Option<u64>,
    pub stamps: Vec<RankedStamp>,
    pub builders: Vec<BuilderRow>,
}

impl GridResponse {
    pub fn new(req: &GridRequest, grid: Grid) -> Self {
        let builders = grid
            .rows
            .into_iter()
            .map(|row| BuilderRow {
                builds: row.builds.iter().map(|b| b.as_ref().map(BuildCell::from_build)).collect(),
                builder: row.builder,
            })
            .collect();

        Self {
            project: grid.project,
            categories: req.query.categories.clone(),
            branch: req.query.branch.clone(),
            reload: req.reload,
            stamps: grid.stamps,
            builders,
        }
    }
}

/// One stamp plus one optional cell per builder.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StampCells {
    pub stamp: RankedStamp,
    pub builds: Vec<Option<BuildCell>>,
}

/// Transposed layout: stamps down the side, builders across the top.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransposedGridResponse {
    pub project: ProjectInfo,
    pub categories: Vec<String>,
    pub branch: BranchFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reload: Option<u64>,
    /// Column headers, sorted by name.
    pub builders: Vec<BuilderSummary>,
    pub rows: Vec<StampCells>,
}

impl TransposedGridResponse {
    pub fn new(req: &GridRequest, grid: Grid) -> Self {
        let rows = grid
            .stamp_rows()
            .into_iter()
            .map(|row| StampCells {
                stamp: row.stamp.clone(),
                builds: row.builds.into_iter().map(|b| b.map(BuildCell::from_build)).collect(),
            })
            .collect();

        Self {
            project: grid.project,
            categories: req.query.categories.clone(),
            branch: req.query.branch.clone(),
            reload: req.reload,
            builders: grid.rows.into_iter().map(|r| r.builder).collect(),
            rows,
        }
    }
}

/// Single build page: the build cell and its reporting steps, newest first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStatusResponse {
    pub build: BuildCell,
    pub steps: Vec<BuildStep>,
}

impl From<BuildStatusView> for BuildStatusResponse {
    fn from(view: BuildStatusView) -> Self {
        Self {
            build: view.cell,
            steps: view.steps,
        }
    }
}
