use explorecourses_catalog::Course;

use crate::config::{InconsistentPolicy, MergeConfig};
use crate::error::MergeError;
use crate::merge::merge;
use crate::model::{MergeMeta, MergeOutput, MergeResult};
use crate::summary::compute_summary;

/// Run a merge per config. Returns merged courses, failed groups and a summary.
pub fn run(config: &MergeConfig, courses: &[Course]) -> Result<MergeResult, MergeError> {
    if courses.is_empty() {
        return Err(MergeError::EmptyInput);
    }

    let (selected, filtered): (Vec<&Course>, Vec<&Course>) =
        courses.iter().partition(|c| config.includes_year(&c.year));
    for course in &filtered {
        log::debug!(
            "skipping {} {}: year not selected",
            course.year,
            course.course_code()
        );
    }

    log::info!(
        "merge '{}': {} listings ({} filtered out)",
        config.name,
        courses.len(),
        filtered.len()
    );

    let output = if selected.is_empty() {
        MergeOutput::default()
    } else {
        merge(selected.iter().copied())?
    };

    match config.on_inconsistent {
        InconsistentPolicy::Abort => {
            if let Some(failure) = output.failures.first() {
                log::error!("merge '{}' aborted: {failure}", config.name);
                return Err(MergeError::InconsistentGroup(failure.clone()));
            }
        }
        InconsistentPolicy::Skip => {
            for failure in &output.failures {
                log::warn!("skipping {failure}");
            }
        }
    }

    let summary = compute_summary(courses.len(), filtered.len(), &output);
    log::info!(
        "merge '{}' done: {} groups, {} merged ({} cross-listed), {} failed",
        config.name,
        summary.total_groups,
        summary.merged,
        summary.crosslisted,
        summary.failed
    );

    Ok(MergeResult {
        meta: MergeMeta {
            config_name: config.name.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
        },
        summary,
        merged: output.merged,
        failures: output.failures,
    })
}

impl MergeResult {
    pub fn to_json_pretty(&self) -> Result<String, MergeError> {
        serde_json::to_string_pretty(self).map_err(|e| MergeError::Json(e.to_string()))
    }
}
