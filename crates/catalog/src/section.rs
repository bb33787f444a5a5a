use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::course::Attribute;

/// An instructor teaching a schedule block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Instructor {
    pub name: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub sunet_id: String,
    pub role: String,
}

/// One meeting pattern of a section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Schedule {
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    /// Positional, in catalog order.
    pub days: Vec<String>,
    pub instructors: BTreeSet<Instructor>,
}

/// A class offering of a course in one term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Section {
    pub class_id: u32,
    pub term: String,
    pub term_id: u32,
    pub subject: String,
    pub code: String,
    pub units: String,
    pub section_number: String,
    pub component: String,
    pub num_enrolled: u32,
    pub max_enrolled: u32,
    pub num_waitlist: u32,
    pub max_waitlist: u32,
    pub enroll_status: String,
    pub add_consent: String,
    pub drop_consent: String,
    pub instruction_mode: String,
    pub course_id: u32,
    pub schedules: BTreeSet<Schedule>,
    pub notes: String,
    pub attributes: BTreeSet<Attribute>,
}
