use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use explorecourses_catalog::{AdministrativeInformation, Attribute, Course, LearningObjective, Section, Tag};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Group key = (year, course_id). Groups never span academic years.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupKey {
    pub year: String,
    pub course_id: u32,
}

impl GroupKey {
    pub fn of(course: &Course) -> Self {
        Self {
            year: course.year.clone(),
            course_id: course.course_id(),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.year, self.course_id)
    }
}

// ---------------------------------------------------------------------------
// Consistency
// ---------------------------------------------------------------------------

/// Fields every listing of a group must agree on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharedField {
    Title,
    Description,
    Repeatable,
    Grading,
    UnitsMin,
    UnitsMax,
    LearningObjectives,
    Attributes,
}

impl SharedField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Repeatable => "repeatable",
            Self::Grading => "grading",
            Self::UnitsMin => "units_min",
            Self::UnitsMax => "units_max",
            Self::LearningObjectives => "learning_objectives",
            Self::Attributes => "attributes",
        }
    }
}

impl fmt::Display for SharedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A group whose listings disagree on one or more shared fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InconsistentGroup {
    pub key: GroupKey,
    /// In declaration order of [`SharedField`], never empty.
    pub fields: Vec<SharedField>,
    /// Course codes of the group's listings, representative first.
    pub course_codes: Vec<String>,
}

impl fmt::Display for InconsistentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields.iter().map(SharedField::as_str).collect();
        write!(
            f,
            "inconsistent cross-listing group {} [{}]: listings disagree on {}",
            self.key,
            self.course_codes.join(", "),
            fields.join(", ")
        )
    }
}

// ---------------------------------------------------------------------------
// Merged course
// ---------------------------------------------------------------------------

/// One course reconciled from all of its cross-listings.
///
/// Scalar fields come from the representative listing. Per-listing fields hold
/// one slot per listing, representative first, then the other listings in
/// course order. [`MergedCourse::from_listings`] and [`crate::merge`] keep
/// every per-listing field the same length; the accessors return `None`
/// rather than panic on a value edited out of shape.
#[derive(Debug, Clone, Serialize)]
pub struct MergedCourse {
    pub year: String,
    /// Representative title with any trailing cross-list annotation removed.
    pub title: String,
    pub description: String,
    pub repeatable: bool,
    pub grading: String,
    pub units_min: u32,
    pub units_max: u32,
    pub learning_objectives: BTreeSet<LearningObjective>,
    pub attributes: BTreeSet<Attribute>,

    pub subject: Vec<String>,
    pub code: Vec<String>,
    /// Each listing's title as published, annotation included.
    pub listing_titles: Vec<String>,
    pub gers: Vec<BTreeSet<String>>,
    pub remote: Vec<Option<bool>>,
    pub sections: Vec<BTreeSet<Section>>,
    pub administrative_information: Vec<AdministrativeInformation>,
    pub tags: Vec<BTreeSet<Tag>>,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Result of merging one batch of listings. Groups succeed or fail independently.
#[derive(Debug, Clone, Default)]
pub struct MergeOutput {
    /// Ordered by group key.
    pub merged: Vec<MergedCourse>,
    pub failures: Vec<InconsistentGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MergeSummary {
    pub total_listings: usize,
    pub filtered_listings: usize,
    pub total_groups: usize,
    pub merged: usize,
    /// Merged groups with more than one listing.
    pub crosslisted: usize,
    pub failed: usize,
    pub field_failures: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MergeMeta {
    pub config_name: String,
    pub engine_version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MergeResult {
    pub meta: MergeMeta,
    pub summary: MergeSummary,
    pub merged: Vec<MergedCourse>,
    pub failures: Vec<InconsistentGroup>,
}
