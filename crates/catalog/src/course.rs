use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::section::Section;

// ---------------------------------------------------------------------------
// Leaf records
// ---------------------------------------------------------------------------

/// A catalog attribute of a course or section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
    pub description: String,
    pub catalog_print: bool,
    pub schedule_print: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LearningObjective {
    pub requirement_code: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tag {
    pub organization: String,
    pub name: String,
}

/// Registrar bookkeeping for one listing.
///
/// `course_id` is shared by every cross-listing of the same underlying course
/// within one academic year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AdministrativeInformation {
    pub course_id: u32,
    pub effective_status: String,
    pub offer_number: u32,
    pub academic_group: String,
    pub academic_organization: String,
    pub academic_career: String,
    /// `None` when the catalog does not say.
    pub final_exam_flag: Option<bool>,
    pub catalog_print: bool,
    pub schedule_print: bool,
    pub max_units_repeat: u32,
    pub max_times_repeat: u32,
}

// ---------------------------------------------------------------------------
// Course
// ---------------------------------------------------------------------------

/// A single catalog listing.
///
/// Identity is `(year, course_code)`. Two cross-listings share `course_id` but
/// differ in `course_code`, so they compare unequal as individual records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub year: String,
    pub subject: String,
    pub code: String,
    pub title: String,
    pub description: String,
    pub gers: BTreeSet<String>,
    pub repeatable: bool,
    pub grading: String,
    pub units_min: u32,
    pub units_max: u32,
    /// `None` when the catalog does not say.
    pub remote: Option<bool>,
    pub learning_objectives: BTreeSet<LearningObjective>,
    pub sections: BTreeSet<Section>,
    pub administrative_information: AdministrativeInformation,
    pub attributes: BTreeSet<Attribute>,
    pub tags: BTreeSet<Tag>,
}

impl Course {
    /// Display code, e.g. `"CS 106A"`.
    pub fn course_code(&self) -> String {
        format!("{} {}", self.subject, self.code)
    }

    pub fn course_id(&self) -> u32 {
        self.administrative_information.course_id
    }

    // Same order as comparing `(year, course_code())` for codes without
    // control characters, without building the joined string.
    fn identity(&self) -> (&str, &str, &str) {
        (&self.year, &self.subject, &self.code)
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Course {}

impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl PartialOrd for Course {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Course {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
