use stampgrid_model::{Build, BuildCell, BuildNumber, BuildStep};
use tracing::debug;

use crate::{LookupError, StatusBackend};

/// A single build laid out for display: its cell and the steps that reported something,
/// newest step first.
#[derive(Debug, Clone)]
pub struct BuildStatusView {
    pub cell: BuildCell,
    pub steps: Vec<BuildStep>,
    pub build: Build,
}

impl BuildStatusView {
    fn new(build: Build) -> Self {
        let steps = build
            .steps
            .iter()
            .rev()
            .filter(|s| !s.text.is_empty())
            .cloned()
            .collect();
        Self {
            cell: BuildCell::from_build(&build),
            steps,
            build,
        }
    }
}

/// Look up one build by builder name and number, both as given by the caller.
///
/// Negative numbers count back from the newest build, so `-1` is the latest.
/// Every failure is a [`LookupError`] whose message is fit to show as-is.
pub fn build_status<B>(
    backend: &B,
    builder: Option<&str>,
    number: Option<&str>,
) -> Result<BuildStatusView, LookupError>
where
    B: StatusBackend + ?Sized,
{
    let (Some(name), Some(raw)) = (
        builder.filter(|s| !s.is_empty()),
        number.filter(|s| !s.is_empty()),
    ) else {
        return Err(LookupError::MissingParameters);
    };

    let info = backend.builder(name).ok_or(LookupError::UnknownBuilder)?;
    let requested: i64 = raw
        .trim()
        .parse()
        .map_err(|_| LookupError::UnknownBuild(raw.to_string()))?;
    let unknown = || LookupError::UnknownBuild(requested.to_string());

    let number = resolve_number(requested, info.latest_build).ok_or_else(unknown)?;
    let build = backend.build(name, number).ok_or_else(unknown)?;

    debug!(builder = name, number, "build status resolved");
    Ok(BuildStatusView::new(build))
}

fn resolve_number(requested: i64, latest: Option<BuildNumber>) -> Option<BuildNumber> {
    if requested >= 0 {
        return BuildNumber::try_from(requested).ok();
    }
    let count = i64::from(latest?) + 1;
    BuildNumber::try_from(count + requested).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StatusStore;
    use stampgrid_model::{BuildResult, SourceStamp};
    use std::time::{Duration, UNIX_EPOCH};

    fn store() -> StatusStore {
        let store = StatusStore::new();
        store.add_builder("linux", None);
        let t = Some(UNIX_EPOCH + Duration::from_secs(10));
        store.add_build("linux", SourceStamp::new("r1"), t);
        let n = store.add_build("linux", SourceStamp::new("r2"), t).unwrap();

        let mut compile = BuildStep::new("compile");
        compile.text = vec!["compile".into()];
        compile.result = Some(BuildResult::Success);
        store.add_step("linux", n, compile);
        store.add_step("linux", n, BuildStep::new("silent"));
        let mut test = BuildStep::new("test");
        test.text = vec!["test".into(), "failed".into()];
        store.add_step("linux", n, test);
        store
    }

    #[test]
    fn unknown_builder_message() {
        let err = build_status(&store(), Some("mac"), Some("0")).unwrap_err();
        assert_eq!(err, LookupError::UnknownBuilder);
        assert_eq!(err.to_string(), "unknown builder");
    }

    #[test]
    fn missing_parameters_message() {
        let store = store();
        for (b, n) in [(None, Some("1")), (Some("linux"), None), (Some(""), Some("1"))] {
            let err = build_status(&store, b, n).unwrap_err();
            assert_eq!(err.to_string(), "builder and number parameter missing");
        }
    }

    #[test]
    fn unknown_build_message() {
        let store = store();
        let err = build_status(&store, Some("linux"), Some("7")).unwrap_err();
        assert_eq!(err.to_string(), "unknown build 7");

        let err = build_status(&store, Some("linux"), Some("seven")).unwrap_err();
        assert_eq!(err, LookupError::UnknownBuild("seven".to_string()));

        let err = build_status(&store, Some("linux"), Some("-3")).unwrap_err();
        assert_eq!(err.to_string(), "unknown build -3");
        let err = build_status(&store, Some("linux"), Some(" 07")).unwrap_err();
        assert_eq!(err.to_string(), "unknown build 7");
    }

    #[test]
    fn steps_with_text_newest_first() {
        let view = build_status(&store(), Some("linux"), Some("1")).unwrap();
        let names: Vec<_> = view.steps.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["test", "compile"]);
        assert_eq!(view.cell.text, vec!["building"]);
        assert_eq!(view.build.number, 1);
    }

    #[test]
    fn negative_number_counts_from_newest() {
        let store = store();
        let latest = build_status(&store, Some("linux"), Some("-1")).unwrap();
        assert_eq!(latest.build.number, 1);
        let first = build_status(&store, Some("linux"), Some("-2")).unwrap();
        assert_eq!(first.build.number, 0);
    }
}
