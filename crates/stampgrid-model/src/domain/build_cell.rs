use serde::{Deserialize, Serialize};

use crate::{Build, BuildNumber, BuilderName};

const RUNNING_CLASS: &str = "running";

/// Renderer-facing summary of one build in a grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildCell {
    pub builder: BuilderName,
    pub number: BuildNumber,
    /// Link relative to the status root: `builders/<name>/builds/<number>`.
    pub url: String,
    pub text: Vec<String>,
    /// Status class (`success`, `failure`, `running`, ...); empty when unknown.
    pub class: String,
}

impl BuildCell {
    pub fn from_build(build: &Build) -> Self {
        let (text, class) = if build.is_finished() {
            let class = build
                .result
                .map(|r| r.css_class())
                .unwrap_or_default()
                .to_string();
            (finished_text(&build.text), class)
        } else {
            (vec!["building".to_string()], RUNNING_CLASS.to_string())
        };

        Self {
            builder: build.builder.clone(),
            number: build.number,
            url: format!("builders/{}/builds/{}", build.builder, build.number),
            text,
            class,
        }
    }
}

fn finished_text(text: &[String]) -> Vec<String> {
    match text {
        [] => vec!["(no information)".to_string()],
        [a, b] if a == "build" && b == "successful" => vec!["OK".to_string()],
        _ => text.to_vec(),
    }
}
