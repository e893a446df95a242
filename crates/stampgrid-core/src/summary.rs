use std::time::SystemTime;

use stampgrid_model::{BuilderInfo, BuilderState, BuilderSummary, SchedulerInfo};

/// Header data for one builder.
///
/// An idle builder that some scheduler expects to feed soon is reported as `Waiting`.
pub fn builder_summary(info: &BuilderInfo, schedulers: &[SchedulerInfo]) -> BuilderSummary {
    let upcoming: Vec<SystemTime> = schedulers
        .iter()
        .filter(|s| s.targets(&info.name))
        .flat_map(|s| s.pending_build_times.iter().copied())
        .collect();

    let state = match info.state {
        BuilderState::Idle if !upcoming.is_empty() => BuilderState::Waiting,
        other => other,
    };

    BuilderSummary {
        name: info.name.clone(),
        url: format!("builders/{}", urlencoding::encode(&info.name)),
        state,
        pending: info.pending.len(),
        upcoming,
    }
}
