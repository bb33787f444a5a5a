use std::collections::BTreeMap;

use crate::model::{MergeOutput, MergeSummary};

/// Compute summary statistics for one merge run.
pub fn compute_summary(
    total_listings: usize,
    filtered_listings: usize,
    output: &MergeOutput,
) -> MergeSummary {
    let mut field_failures: BTreeMap<String, usize> = BTreeMap::new();
    for failure in &output.failures {
        for field in &failure.fields {
            *field_failures.entry(field.to_string()).or_insert(0) += 1;
        }
    }

    MergeSummary {
        total_listings,
        filtered_listings,
        total_groups: output.merged.len() + output.failures.len(),
        merged: output.merged.len(),
        crosslisted: output.merged.iter().filter(|m| m.len() > 1).count(),
        failed: output.failures.len(),
        field_failures,
    }
}
