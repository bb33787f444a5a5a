use std::collections::BTreeSet;

use explorecourses_catalog::{AdministrativeInformation, Course};

pub(crate) fn listing(year: &str, subject: &str, code: &str, course_id: u32) -> Course {
    Course {
        year: year.into(),
        subject: subject.into(),
        code: code.into(),
        title: format!("Programming Methodology ({subject} {code})"),
        description: "Introduction to the engineering of computer applications.".into(),
        gers: BTreeSet::new(),
        repeatable: false,
        grading: "Letter or Credit/No Credit".into(),
        units_min: 3,
        units_max: 5,
        remote: None,
        learning_objectives: BTreeSet::new(),
        sections: BTreeSet::new(),
        administrative_information: AdministrativeInformation {
            course_id,
            effective_status: "A".into(),
            offer_number: 1,
            academic_group: "ENGR".into(),
            academic_organization: subject.into(),
            academic_career: "UG".into(),
            final_exam_flag: Some(true),
            catalog_print: true,
            schedule_print: true,
            max_units_repeat: 5,
            max_times_repeat: 1,
        },
        attributes: BTreeSet::new(),
        tags: BTreeSet::new(),
    }
}
