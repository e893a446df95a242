//! Seed an in-memory status store and print a grid page as JSON.
//!
//! Arguments are query-string pairs, e.g. `grid-dump width=3 branch=trunk category=release`.
//! Pass `transposed` to get the stamp-major layout and `build=<builder>/<number>` for a
//! single build.

use std::{
    sync::Arc,
    time::{Duration, SystemTime},
};

use stampgrid_api::{ApiHandler, GridLayout, GridRequest, StatusApiAdapter};
use stampgrid_core::StatusStore;
use stampgrid_model::{
    BuildResult, BuildStep, BuilderState, ProjectInfo, SchedulerInfo, SourceStamp,
};
use stampgrid_observe::{LoggerConfig, logger_init};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1) Logger
    logger_init(&LoggerConfig::from_env())?;

    // 2) Status
    let store = seed_store();
    info!(builders = 4, "status store seeded");
    let api = StatusApiAdapter::new(Arc::new(store));

    // 3) Request
    let args: Vec<String> = std::env::args().skip(1).collect();
    let layout = if args.iter().any(|a| a == "transposed") {
        GridLayout::Transposed
    } else {
        GridLayout::Standard
    };
    let pairs: Vec<(&str, &str)> = args.iter().filter_map(|a| a.split_once('=')).collect();

    let out = if let Some((_, target)) = pairs.iter().find(|(k, _)| *k == "build") {
        let (builder, number) = match target.split_once('/') {
            Some((b, n)) => (Some(b.to_string()), Some(n.to_string())),
            None => (Some(target.to_string()), None),
        };
        match api.build_status(builder, number).await {
            Ok(resp) => serde_json::to_string_pretty(&resp)?,
            Err(e) => e.to_string(),
        }
    } else {
        let req = GridRequest::from_pairs(layout, pairs.iter().copied())?;
        match layout {
            GridLayout::Standard => serde_json::to_string_pretty(&api.grid(req).await?)?,
            GridLayout::Transposed => {
                serde_json::to_string_pretty(&api.transposed_grid(req).await?)?
            }
        }
    };

    println!("{out}");
    Ok(())
}

fn seed_store() -> StatusStore {
    let store = StatusStore::new();
    store.set_project(ProjectInfo {
        name: Some("demo".to_string()),
        url: Some("https://ci.example.org/".to_string()),
    });

    let base = SystemTime::now() - Duration::from_secs(3600);
    let at = |mins: u64| base + Duration::from_secs(mins * 60);

    for (name, category) in [
        ("linux-x86_64", "release"),
        ("macos-arm64", "release"),
        ("windows-x64", "release"),
        ("docs", "docs"),
    ] {
        store.add_builder(name, Some(category.to_string()));
        store.set_state(name, BuilderState::Idle);
    }

    let revisions = ["a1f3", "b27c", "c9d0", "d412", "e8aa", "f051"];
    for (i, rev) in revisions.iter().enumerate() {
        let stamp = SourceStamp::new(*rev);
        let started = at(i as u64 * 8);
        for (j, builder) in ["linux-x86_64", "macos-arm64", "windows-x64"].iter().enumerate() {
            if (i + j) % 4 == 3 {
                continue;
            }
            let start = started + Duration::from_secs(j as u64 * 45);
            let Some(n) = store.add_build(builder, stamp.clone(), Some(start)) else {
                continue;
            };
            let mut compile = BuildStep::new("compile");
            compile.text = vec!["compile".to_string()];
            store.add_step(builder, n, compile);

            let (result, text) = if (i * 3 + j) % 5 == 0 {
                (BuildResult::Failure, vec!["failed".to_string(), "test".to_string()])
            } else {
                (BuildResult::Success, vec!["build".to_string(), "successful".to_string()])
            };
            store.finish_build(builder, n, result, text, started + Duration::from_secs(600));
        }
    }

    store.add_build("docs", SourceStamp::new("f051").with_branch("docs-site"), Some(at(50)));
    store.set_state("linux-x86_64", BuilderState::Building);
    store.request_build("windows-x64", SourceStamp::new("f051"));
    store.add_scheduler(SchedulerInfo {
        name: "nightly".to_string(),
        builder_names: vec!["macos-arm64".to_string()],
        pending_build_times: vec![SystemTime::now() + Duration::from_secs(6 * 3600)],
    });

    store
}
